use async_trait::async_trait;
use database::postgres::begin_read_only;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::{
    entity,
    error::StorageResult,
    predicate::{Axis, StoragePredicate},
    repository::StorageRepository,
};

/// PostgreSQL-backed repository. Every call runs in its own read-only transaction.
pub struct PgStorageRepository {
    db: DatabaseConnection,
}

impl PgStorageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn column(axis: Axis) -> entity::Column {
    match axis {
        Axis::Width => entity::Column::Width,
        Axis::Depth => entity::Column::Depth,
        Axis::Height => entity::Column::Height,
    }
}

/// Compile a predicate tree into a SeaORM condition.
pub fn to_condition(predicate: &StoragePredicate) -> Condition {
    match predicate {
        StoragePredicate::All(parts) => parts
            .iter()
            .fold(Condition::all(), |cond, p| cond.add(to_condition(p))),
        StoragePredicate::Any(parts) => parts
            .iter()
            .fold(Condition::any(), |cond, p| cond.add(to_condition(p))),
        StoragePredicate::Category(category) => {
            Condition::all().add(entity::Column::StorageCategory.eq(i32::from(*category)))
        }
        StoragePredicate::Country(country) => {
            Condition::all().add(entity::Column::CountryCode.eq(country.as_str()))
        }
        StoragePredicate::Active(active) => {
            Condition::all().add(entity::Column::Active.eq(*active))
        }
        StoragePredicate::Between { axis, lower, upper } => {
            Condition::all().add(column(*axis).between(*lower, *upper))
        }
    }
}

#[async_trait]
impl StorageRepository for PgStorageRepository {
    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[String]) -> StorageResult<Vec<entity::Model>> {
        let txn = begin_read_only(&self.db).await?;
        let models = entity::Entity::find()
            .filter(entity::Column::StorageDataId.is_in(ids.iter().cloned()))
            .all(&txn)
            .await?;
        txn.commit().await?;

        Ok(models)
    }

    #[instrument(skip(self, predicate))]
    async fn search(&self, predicate: &StoragePredicate) -> StorageResult<Vec<entity::Model>> {
        let txn = begin_read_only(&self.db).await?;
        let models = entity::Entity::find()
            .filter(to_condition(predicate))
            .order_by_asc(entity::Column::StorageDataId)
            .all(&txn)
            .await?;
        txn.commit().await?;

        tracing::debug!(matched = models.len(), "Search query finished");
        Ok(models)
    }
}
