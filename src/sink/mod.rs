//! Destinations for accepted form submissions

mod jsonl;
mod log_sink;
mod traits;

pub use jsonl::{JsonlSink, SubmissionRecord};
pub use log_sink::LogSink;
pub use traits::SubmitSink;

#[cfg(test)]
pub use traits::MockSubmitSink;
