//! Shared test utilities for the users service
//!
//! - `TestDatabase`: in-memory SQLite with migrations applied (feature: "sqlite")
//! - `TestDataBuilder`: deterministic user data derived from a test name
//! - `assertions`: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_repository_test() {
//!     let db = TestDatabase::new().await;
//!     let data = TestDataBuilder::from_test_name("my_repository_test");
//!
//!     let first = data.first_name("owner");
//!     let email = data.email("owner");
//! }
//! ```

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::TestDatabase;

/// Deterministic user field values.
///
/// The same test name always yields the same values, and different
/// suffixes within one test never collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::from_test_name("test_create_user");
    /// assert_eq!(data.first_name("a"), TestDataBuilder::from_test_name("test_create_user").first_name("a"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn first_name(&self, suffix: &str) -> String {
        format!("First-{}-{}", self.short_seed(), suffix)
    }

    pub fn last_name(&self, suffix: &str) -> String {
        format!("Last-{}-{}", self.short_seed(), suffix)
    }

    pub fn email(&self, suffix: &str) -> String {
        format!("user-{}-{}@example.com", self.short_seed(), suffix)
    }

    /// Age in the valid range (18..=77), stable per seed.
    pub fn age(&self) -> i64 {
        18 + (self.seed % 60) as i64
    }

    fn short_seed(&self) -> String {
        format!("{:x}", self.seed & 0xffff_ffff)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that `messages` joined by `,` equals `expected` in order.
    pub fn assert_joined(actual: &str, expected: &[&str]) {
        assert_eq!(
            actual,
            expected.join(","),
            "violation messages differ or are out of order"
        );
    }
}
