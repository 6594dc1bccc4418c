//! Domain models with validation at construction
//!
//! Request bodies arrive as untyped JSON. They are checked here and turned
//! into typed values before any handler touches a field.

pub mod validation;
pub mod message;
pub mod reverse;

pub use validation::ValidationError;
pub use message::{Message, MessageText, MESSAGE_LIST_LIMIT};
pub use reverse::{reverse_code_points, ReverseInput};
