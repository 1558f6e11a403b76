//! # Resources
//!
//! Binds an entity type to everything the generic CRUD routes need: its
//! display name, URL segment, the caller-facing field set and its validator.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{Cheese, CheeseFields, NewCheese, NewWine, Wine, WineFields};

use super::errors::DomainResult;
use super::validation::{validate_cheese, validate_wine};

/// An entity exposed over HTTP
pub trait Resource: Serialize + Send + Sync + 'static {
    /// Name used in messages ("Wine not found")
    const NAME: &'static str;

    /// Collection path segment ("wines")
    const PATH: &'static str;

    /// Field set accepted on create and update
    type Fields: DeserializeOwned + Send + 'static;

    /// Validated form handed to the repository
    type Draft: Send + Sync + 'static;

    fn validate(fields: &Self::Fields) -> DomainResult<Self::Draft>;
}

impl Resource for Wine {
    const NAME: &'static str = "Wine";
    const PATH: &'static str = "wines";

    type Fields = WineFields;
    type Draft = NewWine;

    fn validate(fields: &WineFields) -> DomainResult<NewWine> {
        validate_wine(fields)
    }
}

impl Resource for Cheese {
    const NAME: &'static str = "Cheese";
    const PATH: &'static str = "cheeses";

    type Fields = CheeseFields;
    type Draft = NewCheese;

    fn validate(fields: &CheeseFields) -> DomainResult<NewCheese> {
        validate_cheese(fields)
    }
}
