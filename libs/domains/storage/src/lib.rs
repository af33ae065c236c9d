//! Storage Domain
//!
//! Lookup and dimension search over a catalog of storage furniture
//! (boxes and shelves).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /fetch_storage, GET /search_storage
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, record shaping, pagination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Predicate   │  ← Pure width/depth/height filter tree
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← In-memory evaluation or SeaORM condition
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_storage::{
//!     handlers,
//!     repository::InMemoryStorageRepository,
//!     service::StorageService,
//!     SearchConfig,
//! };
//!
//! let repository = InMemoryStorageRepository::new();
//! let service = StorageService::new(repository, SearchConfig::default());
//!
//! let router = handlers::router(service);
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod predicate;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use config::SearchConfig;
pub use error::{StorageError, StorageResult};
pub use models::{
    CountryCode, FetchStorageQuery, FetchStorageResponse, SearchStorageQuery,
    SearchStorageResponse, StorageCategory, StorageItem, StorageSummary,
};
pub use postgres::PgStorageRepository;
pub use predicate::{
    Axis, AxisConstraint, DimensionConstraint, DimensionQuery, POINT_TOLERANCE, StoragePredicate,
};
pub use repository::{InMemoryStorageRepository, StorageRepository};
pub use service::StorageService;
