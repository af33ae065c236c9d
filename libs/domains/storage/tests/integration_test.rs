//! Integration tests for the storage domain
//!
//! These use real PostgreSQL via testcontainers to check that the compiled
//! SeaORM conditions agree with the in-memory predicate. Docker must be running.

use chrono::Utc;
use domain_storage::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};
use serde_json::json;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn record(id: String, width: f64, depth: f64, height: f64) -> entity::Model {
    entity::Model {
        storage_data_id: id.clone(),
        storage_category: 0,
        shop_id: 7,
        item_id: format!("item-{}", id),
        item_title: "Integration box".to_string(),
        item_url: "https://example.com/box".to_string(),
        primary_image_url: "https://example.com/box.jpg".to_string(),
        image_url_list: json!(["https://example.com/box-1.jpg"]),
        price: 2200.0,
        ean: Some("4900000000000".to_string()),
        country_code: "jp".to_string(),
        active: true,
        height,
        width,
        depth,
        colors: json!([2]),
        materials: json!([5]),
        updated_at: Utc::now().into(),
        seller_name: None,
        box_likelihood: Some(0.75),
        box_features: Some(json!([1, 2, 3])),
        shelf_likelihood: None,
        shelf_features: None,
        shelf_genres: None,
    }
}

async fn seed(db: &DatabaseConnection, records: &[entity::Model]) {
    for r in records {
        r.clone()
            .into_active_model()
            .insert(db)
            .await
            .expect("Failed to insert fixture");
    }
}

fn query(width: Option<f64>, inverted: bool) -> SearchStorageQuery {
    SearchStorageQuery {
        width,
        width_lower_limit: None,
        width_upper_limit: None,
        use_width_range: None,
        depth: None,
        depth_lower_limit: None,
        depth_upper_limit: None,
        use_depth_range: None,
        height: None,
        height_lower_limit: None,
        height_upper_limit: None,
        use_height_range: None,
        storage_category: StorageCategory::Box,
        country_code: CountryCode::Jp,
        enable_inverted_search: Some(inverted),
        page: None,
        page_size: None,
    }
}

#[tokio::test]
async fn test_inverted_search_against_postgres() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("pg_inverted");
    let a = record(builder.storage_id("a"), 20.0, 30.0, 25.0);
    let b = record(builder.storage_id("b"), 30.0, 20.0, 25.0);
    seed(&db.connection, &[a.clone(), b.clone()]).await;

    let service = StorageService::new(
        PgStorageRepository::new(db.connection()),
        SearchConfig::default(),
    );

    let plain = service.search_storage(query(Some(20.0), false)).await.unwrap();
    let plain_ids: Vec<_> = plain.data.iter().map(|s| s.storage_data_id.clone()).collect();
    assert_same_ids(&plain_ids, &[a.storage_data_id.as_str()], "plain search");

    let inverted = service.search_storage(query(Some(20.0), true)).await.unwrap();
    let inverted_ids: Vec<_> = inverted.data.iter().map(|s| s.storage_data_id.clone()).collect();
    assert_same_ids(
        &inverted_ids,
        &[a.storage_data_id.as_str(), b.storage_data_id.as_str()],
        "inverted search",
    );
}

#[tokio::test]
async fn test_postgres_agrees_with_in_memory() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("pg_agrees");

    let records: Vec<_> = (0..30)
        .map(|i| {
            let mut r = record(
                builder.storage_id(&i.to_string()),
                builder.dimension(i, 10.0, 40.0),
                builder.dimension(i + 100, 10.0, 40.0),
                builder.dimension(i + 200, 10.0, 40.0),
            );
            r.active = i % 5 != 0;
            r
        })
        .collect();
    seed(&db.connection, &records).await;

    let pg = PgStorageRepository::new(db.connection());
    let memory = InMemoryStorageRepository::with_records(records);

    let range = DimensionConstraint::Range {
        lower: 15.0,
        upper: 30.0,
    };
    for inverted in [false, true] {
        let predicate = DimensionQuery {
            category: StorageCategory::Box,
            country_code: CountryCode::Jp,
            width: range,
            height: DimensionConstraint::Unconstrained,
            depth: DimensionConstraint::Point(20.0),
            inverted,
        }
        .predicate();

        let from_pg: Vec<_> = pg
            .search(&predicate)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.storage_data_id)
            .collect();
        let from_memory: Vec<_> = memory
            .search(&predicate)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.storage_data_id)
            .collect();

        let expected: Vec<&str> = from_memory.iter().map(String::as_str).collect();
        assert_same_ids(&from_pg, &expected, "postgres vs in-memory");
    }
}

#[tokio::test]
async fn test_fetch_by_ids_against_postgres() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("pg_fetch");
    let mut inactive = record(builder.storage_id("off"), 10.0, 10.0, 10.0);
    inactive.active = false;
    let active = record(builder.storage_id("on"), 10.0, 10.0, 10.0);
    seed(&db.connection, &[active.clone(), inactive.clone()]).await;

    let service = StorageService::new(
        PgStorageRepository::new(db.connection()),
        SearchConfig::default(),
    );
    let id_list = format!("{}, {},unknown", active.storage_data_id, inactive.storage_data_id);

    let response = service.fetch_storage(&id_list).await.unwrap();
    let ids: Vec<_> = response.data.iter().map(|i| i.storage_data_id.clone()).collect();
    assert_same_ids(
        &ids,
        &[active.storage_data_id.as_str(), inactive.storage_data_id.as_str()],
        "fetch ignores active",
    );

    let first = assert_some(response.data.first(), "fetched item");
    assert_eq!(first.image_url_list, vec!["https://example.com/box-1.jpg"]);
    assert_eq!(first.box_features, Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn test_empty_table_search_is_empty() {
    let db = TestDatabase::new().await;
    db.truncate_storage().await;

    let service = StorageService::new(
        PgStorageRepository::new(db.connection()),
        SearchConfig::default(),
    );
    let response = service.search_storage(query(Some(20.0), false)).await.unwrap();

    assert_eq!(response.total_items, 0);
    assert_eq!(response.total_pages, 0);
    assert!(!response.has_more);
}
