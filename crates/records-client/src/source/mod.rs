//! Source Layer
//!
//! Record source/sink abstractions and the REST implementation.

mod traits;
mod rest;

#[cfg(test)]
mod tests;

pub use traits::{RecordSink, RecordSource};
pub use rest::{PeopleEndpoint, RestEndpoint, TodoEndpoint};
