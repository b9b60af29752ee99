//! Core types for Runeplan: attributes, starting classes, and the class catalog.
//!
//! This crate holds the reference data a build is planned against. It knows
//! nothing about derived statistics; those live in `rp-progression`. A
//! [`ClassCatalog`] can be built from the embedded class list or parsed from
//! any JSON document with the same shape.

/// The eight primary attributes and the set of scores a character holds.
pub mod attribute;
/// The ordered, cyclically navigable catalog of starting classes.
pub mod catalog;
/// Starting class records.
pub mod class;
/// Error types used throughout the crate.
pub mod error;

/// Re-export attribute types.
pub use attribute::{Attribute, AttributeSet, MAX_ATTRIBUTE, MIN_ATTRIBUTE};
/// Re-export the class catalog.
pub use catalog::ClassCatalog;
/// Re-export the class record.
pub use class::CharacterClass;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
