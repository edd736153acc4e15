//! Records Client
//!
//! Layered like a small backend, but running in the browser:
//! - domain: Records, drafts and the client error type
//! - source: Record source/sink traits and their REST implementation
//! - sync: In-memory collection state and refresh ordering
//! - config: Endpoint configuration

pub mod config;
pub mod domain;
pub mod source;
pub mod sync;

pub use config::ClientConfig;
pub use domain::{ClientError, ClientResult, NewTodo, Person, Todo};
pub use source::{PeopleEndpoint, RecordSink, RecordSource, RestEndpoint, TodoEndpoint};
pub use sync::{
    fetch_latest, submit_then_refresh, Collection, Refresh, RefreshGuard, RefreshOutcome, RefreshTicket,
    Submitted,
};
