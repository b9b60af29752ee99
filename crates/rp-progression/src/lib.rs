//! Progression engine for Runeplan.
//!
//! Turns attribute scores into secondary statistics through static lookup
//! tables, derives character level and rune costs, and wraps the result in
//! immutable [`Build`] snapshots. A [`Planner`] drives builds from user
//! actions with a single step of undo.

pub mod build;
pub mod config;
pub mod derive;
pub mod error;
pub mod planner;
pub mod secondary;
pub mod tables;

pub use build::Build;
pub use config::PlannerConfig;
pub use derive::{
    LevelCost, StaminaAndLoad, derive_cost, derive_discovery, derive_focus, derive_health,
    derive_level, derive_poise, derive_stamina_and_load, runes_between,
};
pub use error::{ProgressionError, ProgressionResult};
pub use planner::{Action, Planner};
pub use secondary::{DERIVATIONS, DerivationInput, SecondaryStats};
pub use tables::MAX_LEVEL;
