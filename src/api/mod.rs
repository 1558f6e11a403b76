//! # API Layer
//!
//! Caller-facing contract shared by every resource: the error model and its
//! responder, the success envelope, write validation and request extractors.

pub mod errors;
pub mod extract;
pub mod resource;
pub mod response;
pub mod validation;

pub use errors::{DomainError, DomainResult, ErrorBody};
pub use extract::{EntityId, JsonBody};
pub use resource::Resource;
pub use response::{Envelope, Reply};
pub use validation::{validate_cheese, validate_wine};
