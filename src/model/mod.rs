//! Entity types
//!
//! Each resource has three shapes: the proposed field set a caller sends
//! (`*Fields`), the validated draft written to the store (`New*`), and the
//! persisted row (`Wine`, `Cheese`).

mod cheese;
mod wine;

pub use cheese::{Cheese, CheeseFields, NewCheese};
pub use wine::{NewWine, Wine, WineFields};
