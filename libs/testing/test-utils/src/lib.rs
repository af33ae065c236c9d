//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let id = builder.storage_id("main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Values derive from a seed, so a test sees the same data on every run.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_search_storage");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Storage record id unique to this builder
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.storage_id("shelf-a"), "sd-7-shelf-a");
    /// ```
    pub fn storage_id(&self, suffix: &str) -> String {
        format!("sd-{}-{}", self.seed, suffix)
    }

    /// A dimension in `[min, max)` derived from the seed and `salt`,
    /// rounded to one decimal place.
    pub fn dimension(&self, salt: u64, min: f64, max: f64) -> f64 {
        let mixed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(salt.wrapping_mul(1442695040888963407));
        let unit = (mixed >> 11) as f64 / (1u64 << 53) as f64;
        ((min + unit * (max - min)) * 10.0).floor() / 10.0
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that `actual` holds exactly the `expected` ids, in any order
    pub fn assert_same_ids<S: AsRef<str>>(actual: &[S], expected: &[&str], context: &str) {
        let mut actual: Vec<&str> = actual.iter().map(AsRef::as_ref).collect();
        let mut expected = expected.to_vec();
        actual.sort_unstable();
        expected.sort_unstable();
        assert_eq!(actual, expected, "{}: id sets differ", context);
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.storage_id("a"), builder2.storage_id("a"));
        assert_eq!(builder1.dimension(1, 10.0, 50.0), builder2.dimension(1, 10.0, 50.0));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.storage_id("a"), builder2.storage_id("a"));
    }

    #[test]
    fn test_dimension_in_range() {
        let builder = TestDataBuilder::from_test_name("dims");
        for salt in 0..100 {
            let d = builder.dimension(salt, 20.0, 40.0);
            assert!((20.0..40.0).contains(&d), "{} out of range", d);
        }
    }

    #[test]
    fn test_assert_same_ids_ignores_order() {
        assertions::assert_same_ids(&["b".to_string(), "a".to_string()], &["a", "b"], "order");
    }
}
