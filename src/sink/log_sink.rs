//! Submit sink that only logs

use super::SubmitSink;
use crate::schema::FormData;
use anyhow::Result;
use async_trait::async_trait;

/// Emits each submission as a structured `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl SubmitSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn submit(&self, data: &FormData) -> Result<()> {
        let payload = serde_json::to_string(data)?;
        tracing::info!(
            subscription = %data.subscription.kind(),
            hobbies = data.hobbies.len(),
            %payload,
            "Form submitted"
        );
        Ok(())
    }
}
