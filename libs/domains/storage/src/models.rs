use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::entity;
use crate::error::StorageError;
use crate::predicate::{DimensionConstraint, DimensionQuery};

pub const MISSING_DIMENSION: &str =
    "At least one of 'width', 'depth', or 'height' must be specified";

/// Kind of storage furniture. Serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum StorageCategory {
    Box,
    Shelf,
}

impl TryFrom<i32> for StorageCategory {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StorageCategory::Box),
            1 => Ok(StorageCategory::Shelf),
            other => Err(format!("unknown storage category {}", other)),
        }
    }
}

impl From<StorageCategory> for i32 {
    fn from(category: StorageCategory) -> Self {
        match category {
            StorageCategory::Box => 0,
            StorageCategory::Shelf => 1,
        }
    }
}

/// Market an item is sold in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CountryCode {
    Jp,
    Us,
}

impl CountryCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Jp => "jp",
            CountryCode::Us => "us",
        }
    }
}

/// Full item as returned by fetch-by-id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StorageItem {
    pub storage_data_id: String,
    /// 0 = box, 1 = shelf
    #[schema(value_type = i32)]
    pub storage_category: StorageCategory,
    pub shop_id: i32,
    pub item_id: String,
    pub item_title: String,
    pub item_url: String,
    pub primary_image_url: String,
    pub image_url_list: Vec<String>,
    pub price: f64,
    pub ean: Option<String>,
    pub country_code: CountryCode,
    pub active: bool,
    /// Centimetres
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    pub colors: Vec<i32>,
    pub materials: Vec<i32>,
    pub updated_at: DateTime<Utc>,
    pub seller_name: Option<String>,
    pub box_likelihood: Option<f64>,
    pub box_features: Option<Vec<i32>>,
    pub shelf_likelihood: Option<f64>,
    pub shelf_features: Option<Vec<i32>>,
    pub shelf_genres: Option<Vec<i32>>,
}

/// Search result entry: an item without its image list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StorageSummary {
    pub storage_data_id: String,
    #[schema(value_type = i32)]
    pub storage_category: StorageCategory,
    pub shop_id: i32,
    pub item_id: String,
    pub item_title: String,
    pub item_url: String,
    pub primary_image_url: String,
    pub price: f64,
    pub ean: Option<String>,
    pub country_code: CountryCode,
    pub active: bool,
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    pub colors: Vec<i32>,
    pub materials: Vec<i32>,
    pub updated_at: DateTime<Utc>,
    pub seller_name: Option<String>,
    pub box_likelihood: Option<f64>,
    pub box_features: Option<Vec<i32>>,
    pub shelf_likelihood: Option<f64>,
    pub shelf_features: Option<Vec<i32>>,
    pub shelf_genres: Option<Vec<i32>>,
}

impl From<StorageItem> for StorageSummary {
    fn from(item: StorageItem) -> Self {
        Self {
            storage_data_id: item.storage_data_id,
            storage_category: item.storage_category,
            shop_id: item.shop_id,
            item_id: item.item_id,
            item_title: item.item_title,
            item_url: item.item_url,
            primary_image_url: item.primary_image_url,
            price: item.price,
            ean: item.ean,
            country_code: item.country_code,
            active: item.active,
            height: item.height,
            width: item.width,
            depth: item.depth,
            colors: item.colors,
            materials: item.materials,
            updated_at: item.updated_at,
            seller_name: item.seller_name,
            box_likelihood: item.box_likelihood,
            box_features: item.box_features,
            shelf_likelihood: item.shelf_likelihood,
            shelf_features: item.shelf_features,
            shelf_genres: item.shelf_genres,
        }
    }
}

impl TryFrom<entity::Model> for StorageItem {
    type Error = StorageError;

    fn try_from(model: entity::Model) -> Result<Self, Self::Error> {
        let id = model.storage_data_id;
        let shaping = |reason: String| StorageError::RecordShaping {
            id: id.clone(),
            reason,
        };

        let storage_category = StorageCategory::try_from(model.storage_category).map_err(shaping)?;
        let country_code = model
            .country_code
            .parse::<CountryCode>()
            .map_err(|_| shaping(format!("unknown country code '{}'", model.country_code)))?;

        Ok(Self {
            storage_data_id: id.clone(),
            storage_category,
            shop_id: model.shop_id,
            item_id: model.item_id,
            item_title: model.item_title,
            item_url: model.item_url,
            primary_image_url: model.primary_image_url,
            image_url_list: json_column("image_url_list", model.image_url_list).map_err(shaping)?,
            price: model.price,
            ean: model.ean,
            country_code,
            active: model.active,
            height: model.height,
            width: model.width,
            depth: model.depth,
            colors: json_column("colors", model.colors).map_err(shaping)?,
            materials: json_column("materials", model.materials).map_err(shaping)?,
            updated_at: model.updated_at.with_timezone(&Utc),
            seller_name: model.seller_name,
            box_likelihood: model.box_likelihood,
            box_features: optional_json_column("box_features", model.box_features)
                .map_err(shaping)?,
            shelf_likelihood: model.shelf_likelihood,
            shelf_features: optional_json_column("shelf_features", model.shelf_features)
                .map_err(shaping)?,
            shelf_genres: optional_json_column("shelf_genres", model.shelf_genres)
                .map_err(shaping)?,
        })
    }
}

fn json_column<T: DeserializeOwned>(column: &str, value: serde_json::Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("invalid {}: {}", column, e))
}

fn optional_json_column<T: DeserializeOwned>(
    column: &str,
    value: Option<serde_json::Value>,
) -> Result<Option<T>, String> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => json_column(column, value).map(Some),
    }
}

/// Query parameters for dimension search
///
/// Each axis takes either a point value, matched within ±0.5, or an
/// inclusive range enabled by its `use_*_range` flag.
#[derive(Debug, Clone, PartialEq, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
#[validate(schema(function = "validate_has_dimension"))]
pub struct SearchStorageQuery {
    pub width: Option<f64>,
    pub width_lower_limit: Option<f64>,
    pub width_upper_limit: Option<f64>,
    pub use_width_range: Option<bool>,
    pub depth: Option<f64>,
    pub depth_lower_limit: Option<f64>,
    pub depth_upper_limit: Option<f64>,
    pub use_depth_range: Option<bool>,
    pub height: Option<f64>,
    pub height_lower_limit: Option<f64>,
    pub height_upper_limit: Option<f64>,
    pub use_height_range: Option<bool>,
    /// 0 = box, 1 = shelf
    #[param(value_type = i32)]
    pub storage_category: StorageCategory,
    pub country_code: CountryCode,
    /// Also match items with width and depth exchanged
    pub enable_inverted_search: Option<bool>,
    /// 0-based page number (default 0)
    pub page: Option<u64>,
    /// Items per page (server default when omitted)
    pub page_size: Option<u64>,
}

fn validate_has_dimension(query: &SearchStorageQuery) -> Result<(), ValidationError> {
    if query.dimension_query().has_dimension() {
        Ok(())
    } else {
        Err(ValidationError::new("missing_dimension")
            .with_message(Cow::Borrowed(MISSING_DIMENSION)))
    }
}

impl SearchStorageQuery {
    /// Resolved width, depth and height constraints.
    pub fn constraints(&self) -> [DimensionConstraint; 3] {
        [
            DimensionConstraint::resolve(
                self.width,
                self.width_lower_limit,
                self.width_upper_limit,
                self.use_width_range,
            ),
            DimensionConstraint::resolve(
                self.depth,
                self.depth_lower_limit,
                self.depth_upper_limit,
                self.use_depth_range,
            ),
            DimensionConstraint::resolve(
                self.height,
                self.height_lower_limit,
                self.height_upper_limit,
                self.use_height_range,
            ),
        ]
    }

    pub fn dimension_query(&self) -> DimensionQuery {
        let [width, depth, height] = self.constraints();
        DimensionQuery {
            category: self.storage_category,
            country_code: self.country_code,
            width,
            height,
            depth,
            inverted: self.enable_inverted_search.unwrap_or(false),
        }
    }

    /// Every supplied filter parameter, in declaration order, excluding paging.
    pub fn filter_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        push_axis(
            &mut params,
            [
                ("width", self.width),
                ("width_lower_limit", self.width_lower_limit),
                ("width_upper_limit", self.width_upper_limit),
            ],
            ("use_width_range", self.use_width_range),
        );
        push_axis(
            &mut params,
            [
                ("depth", self.depth),
                ("depth_lower_limit", self.depth_lower_limit),
                ("depth_upper_limit", self.depth_upper_limit),
            ],
            ("use_depth_range", self.use_depth_range),
        );
        push_axis(
            &mut params,
            [
                ("height", self.height),
                ("height_lower_limit", self.height_lower_limit),
                ("height_upper_limit", self.height_upper_limit),
            ],
            ("use_height_range", self.use_height_range),
        );

        params.push((
            "storage_category",
            i32::from(self.storage_category).to_string(),
        ));
        params.push(("country_code", self.country_code.as_str().to_string()));
        if let Some(inverted) = self.enable_inverted_search {
            params.push(("enable_inverted_search", inverted.to_string()));
        }

        params
    }
}

fn push_axis(
    params: &mut Vec<(&'static str, String)>,
    values: [(&'static str, Option<f64>); 3],
    flag: (&'static str, Option<bool>),
) {
    for (key, value) in values {
        if let Some(value) = value {
            params.push((key, value.to_string()));
        }
    }
    if let (key, Some(value)) = flag {
        params.push((key, value.to_string()));
    }
}

/// Query parameters for fetch-by-id
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchStorageQuery {
    /// Comma-separated storage_data_id values
    pub id_list: String,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchStorageResponse {
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_more: bool,
    /// Present only when `has_more` is true
    pub next_page_url: Option<String>,
    pub data: Vec<StorageSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FetchStorageResponse {
    pub data: Vec<StorageItem>,
}
