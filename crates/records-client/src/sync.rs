//! Collection Sync
//!
//! The view holds one `Collection` per remote list. Every refresh takes a
//! ticket from a shared `RefreshGuard`; only the newest ticket may replace
//! the collection, so a slow response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::domain::ClientResult;
use crate::source::{RecordSink, RecordSource};

/// In-memory records currently rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    records: Vec<T>,
    loaded: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
        }
    }
}

/// What happened to a finished refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Records replaced; carries the new length
    Replaced(usize),
    /// A newer refresh was issued meanwhile; response dropped
    Superseded,
    /// Request failed; previous records kept
    Failed,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any fetch has completed successfully
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Swap in a whole new record set
    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
        self.loaded = true;
    }

    /// Apply a finished refresh if it is still the newest one
    ///
    /// Last issued wins, not last succeeded: if the newest refresh fails,
    /// older responses that did succeed are still dropped and the rows from
    /// before all of them stay.
    pub fn apply(&mut self, guard: &RefreshGuard, refresh: Refresh<T>) -> RefreshOutcome {
        let Refresh { ticket, result } = refresh;
        if !guard.is_current(&ticket) {
            log::debug!("[sync] dropping response for superseded refresh #{}", ticket.0);
            return RefreshOutcome::Superseded;
        }
        match result {
            Ok(records) => {
                let count = records.len();
                self.replace(records);
                log::debug!("[sync] refresh #{} replaced collection with {} records", ticket.0, count);
                RefreshOutcome::Replaced(count)
            }
            Err(e) => {
                log::warn!("[sync] refresh #{} failed, keeping {} records: {}", ticket.0, self.len(), e);
                RefreshOutcome::Failed
            }
        }
    }
}

impl<T: std::fmt::Display> Collection<T> {
    /// One text row per record, in order
    pub fn rows(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }
}

/// Identifies one issued refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Issues refresh tickets; shared by everything refreshing the same collection
#[derive(Debug, Clone, Default)]
pub struct RefreshGuard {
    latest: Arc<AtomicU64>,
}

impl RefreshGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh, superseding every earlier ticket
    pub fn issue(&self) -> RefreshTicket {
        RefreshTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: &RefreshTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Response of one refresh, tagged with its ticket
#[derive(Debug)]
pub struct Refresh<T> {
    pub ticket: RefreshTicket,
    pub result: ClientResult<Vec<T>>,
}

/// Issue a ticket and fetch the full collection from `source`
pub async fn fetch_latest<S: RecordSource>(source: &S, guard: &RefreshGuard) -> Refresh<S::Record> {
    let ticket = guard.issue();
    let result = source.fetch_all().await;
    Refresh { ticket, result }
}

/// A submission the server accepted, and the refresh that followed it
#[derive(Debug)]
pub struct Submitted<T> {
    /// Server answer to the submission, untyped
    pub created: Value,
    pub refresh: Refresh<T>,
}

/// Submit `draft`, then fetch the list again; a failed submit fetches nothing
pub async fn submit_then_refresh<K, S>(
    sink: &K,
    source: &S,
    guard: &RefreshGuard,
    draft: &K::Draft,
) -> ClientResult<Submitted<S::Record>>
where
    K: RecordSink,
    S: RecordSource,
{
    let created = sink.submit(draft).await?;
    log::info!("[sync] submitted, server answered {created}");
    let refresh = fetch_latest(source, guard).await;
    Ok(Submitted { created, refresh })
}
