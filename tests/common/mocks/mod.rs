//! Mock implementations for external dependencies

use async_trait::async_trait;
use mockall::mock;
use movielog::utils::normalizer::{GatewayResult, Normalizer};

// Mock normalization gateway
mock! {
    pub Normalizer {}

    #[async_trait]
    impl Normalizer for Normalizer {
        async fn normalize(&self, prompt: &str) -> GatewayResult<String>;
    }
}

/// A gateway that answers every prompt with `response`, any number of times.
pub fn answering(response: &'static str) -> MockNormalizer {
    let mut mock = MockNormalizer::new();
    mock.expect_normalize()
        .returning(move |_| Ok(response.to_string()));
    mock
}

/// A gateway that must never be called.
pub fn unused() -> MockNormalizer {
    let mut mock = MockNormalizer::new();
    mock.expect_normalize().never();
    mock
}
