use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::config::SearchConfig;
use crate::entity;
use crate::error::{StorageError, StorageResult};
use crate::models::{
    FetchStorageResponse, MISSING_DIMENSION, SearchStorageQuery, SearchStorageResponse,
    StorageItem, StorageSummary,
};
use crate::pagination::{next_page_url, paginate};
use crate::repository::StorageRepository;

/// Service layer for storage search and lookup
pub struct StorageService<R: StorageRepository> {
    repository: Arc<R>,
    config: Arc<SearchConfig>,
}

impl<R: StorageRepository> Clone for StorageService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R: StorageRepository> StorageService<R> {
    pub fn new(repository: R, config: SearchConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            config: Arc::new(config),
        }
    }

    /// Look items up by a comma-separated id list.
    ///
    /// Ids are trimmed and de-duplicated. An empty list returns nothing
    /// without touching the repository.
    #[instrument(skip(self))]
    pub async fn fetch_storage(&self, id_list: &str) -> StorageResult<FetchStorageResponse> {
        let ids = parse_id_list(id_list);
        if ids.is_empty() {
            return Ok(FetchStorageResponse { data: Vec::new() });
        }

        let records = self.repository.find_by_ids(&ids).await?;
        let data = shape_all::<StorageItem>(records);

        tracing::info!(requested = ids.len(), returned = data.len(), "Fetched storage items");
        Ok(FetchStorageResponse { data })
    }

    /// Search by dimensions and return one page of results.
    #[instrument(skip(self, query))]
    pub async fn search_storage(
        &self,
        query: SearchStorageQuery,
    ) -> StorageResult<SearchStorageResponse> {
        query
            .validate()
            .map_err(|_| StorageError::Validation(MISSING_DIMENSION.to_string()))?;

        let predicate = query.dimension_query().predicate();
        let records = self.repository.search(&predicate).await?;
        let summaries = shape_all::<StorageSummary>(records);

        let page = query.page.unwrap_or(0);
        let page_size = query.page_size.unwrap_or(self.config.default_page_size);
        let result = paginate(summaries, page, page_size);

        let next_page_url = result.has_more.then(|| {
            next_page_url(
                &self.config.search_path,
                &query.filter_params(),
                page,
                page_size,
            )
        });

        tracing::info!(
            total_items = result.total_items,
            page,
            page_size,
            has_more = result.has_more,
            "Search completed"
        );

        Ok(SearchStorageResponse {
            total_items: result.total_items,
            total_pages: result.total_pages,
            page: result.page,
            page_size: result.page_size,
            has_more: result.has_more,
            next_page_url,
            data: result.items,
        })
    }
}

/// Split on commas, trim, drop blanks and keep the first of each duplicate.
fn parse_id_list(id_list: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for id in id_list.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        if !ids.iter().any(|seen| seen == id) {
            ids.push(id.to_string());
        }
    }
    ids
}

/// Shape every row, dropping and logging the ones that do not convert.
fn shape_all<T: From<StorageItem>>(records: Vec<entity::Model>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.storage_data_id.clone();
            match StorageItem::try_from(record) {
                Ok(item) => Some(T::from(item)),
                Err(error) => {
                    tracing::warn!(storage_data_id = %id, error = %error, "Dropping malformed record");
                    None
                }
            }
        })
        .collect()
}
