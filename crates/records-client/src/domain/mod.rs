//! Domain Layer
//!
//! Records exchanged with the backends. The server is the only source of
//! truth, so nothing here validates field contents.

mod error;
mod person;
mod todo;

pub use error::{ClientError, ClientResult};
pub use person::Person;
pub use todo::{NewTodo, Todo};
