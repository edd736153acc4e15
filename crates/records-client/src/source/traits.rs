//! Source Layer - Core Traits
//!
//! The views only depend on these, so a fake source can stand in for the
//! network in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ClientResult;

/// Something that can hand over the full current collection
///
/// Futures are `?Send`: in the browser everything runs on the UI event loop.
#[async_trait(?Send)]
pub trait RecordSource {
    type Record;

    /// Fetch every record, in server order
    async fn fetch_all(&self) -> ClientResult<Vec<Self::Record>>;
}

/// Something that accepts new records
#[async_trait(?Send)]
pub trait RecordSink {
    type Draft;

    /// Send a draft; the server's answer is returned untyped
    async fn submit(&self, draft: &Self::Draft) -> ClientResult<Value>;
}
