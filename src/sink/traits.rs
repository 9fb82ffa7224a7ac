//! Trait abstraction for submit handlers to enable mocking in tests

use crate::schema::FormData;
use anyhow::Result;
use async_trait::async_trait;

/// Receives validated form data once per accepted submit
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitSink: Send + Sync {
    /// Short name shown in the status bar
    fn name(&self) -> &'static str;

    /// Handle one accepted submission
    async fn submit(&self, data: &FormData) -> Result<()>;
}
