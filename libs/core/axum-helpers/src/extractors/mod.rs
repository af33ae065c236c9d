//! Custom extractors for Axum handlers.
//!
//! These wrap the stock axum extractors so that rejections render as the
//! standard [`ErrorResponse`](crate::errors::ErrorResponse) body.

pub mod typed_query;

pub use typed_query::TypedQuery;
