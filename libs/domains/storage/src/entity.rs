use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the `storage_table` catalog.
///
/// List columns are stored as JSON and parsed when a row is shaped into a
/// [`StorageItem`](crate::models::StorageItem).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "storage_table")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub storage_data_id: String,
    /// 0 = box, 1 = shelf
    pub storage_category: i32,
    pub shop_id: i32,
    pub item_id: String,
    #[sea_orm(column_type = "Text")]
    pub item_title: String,
    #[sea_orm(column_type = "Text")]
    pub item_url: String,
    #[sea_orm(column_type = "Text")]
    pub primary_image_url: String,
    #[sea_orm(column_type = "Json")]
    pub image_url_list: Json,
    pub price: f64,
    pub ean: Option<String>,
    /// "jp" or "us"
    pub country_code: String,
    pub active: bool,
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    #[sea_orm(column_type = "Json")]
    pub colors: Json,
    #[sea_orm(column_type = "Json")]
    pub materials: Json,
    pub updated_at: DateTimeWithTimeZone,
    pub seller_name: Option<String>,
    pub box_likelihood: Option<f64>,
    #[sea_orm(column_type = "Json", nullable)]
    pub box_features: Option<Json>,
    pub shelf_likelihood: Option<f64>,
    #[sea_orm(column_type = "Json", nullable)]
    pub shelf_features: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub shelf_genres: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
