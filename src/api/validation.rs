//! # Write Validation
//!
//! Presence checks run before any write reaches the store. A text field is
//! present when it is non-null and not blank after trimming; values that pass
//! are kept exactly as supplied.

use crate::model::{CheeseFields, NewCheese, NewWine, WineFields};

use super::errors::{DomainError, DomainResult};

/// Returns the field's value when it is non-blank
fn required(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.trim().is_empty())
}

/// Name, country, colour and description are required.
pub fn validate_wine(fields: &WineFields) -> DomainResult<NewWine> {
    match (
        required(&fields.name),
        required(&fields.description),
        required(&fields.country),
        required(&fields.colour),
    ) {
        (Some(name), Some(description), Some(country), Some(colour)) => Ok(NewWine {
            name: name.clone(),
            description: description.clone(),
            country: country.clone(),
            colour: colour.clone(),
        }),
        _ => Err(DomainError::MissingFields),
    }
}

/// Name, country and milk type are required, and `wine_id` must be present.
/// Zero counts as present; only absence or null is rejected.
pub fn validate_cheese(fields: &CheeseFields) -> DomainResult<NewCheese> {
    match (
        required(&fields.name),
        required(&fields.country),
        required(&fields.milk_type),
        fields.wine_id,
    ) {
        (Some(name), Some(country), Some(milk_type), Some(wine_id)) => Ok(NewCheese {
            name: name.clone(),
            description: fields.description.clone(),
            country: country.clone(),
            milk_type: milk_type.clone(),
            wine_id,
        }),
        _ => Err(DomainError::MissingFields),
    }
}
