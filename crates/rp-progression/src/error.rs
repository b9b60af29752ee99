//! Error types for the progression engine.

use rp_core::{Attribute, CoreError};

/// Errors that can occur while deriving stats or changing a build.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    /// A value lies outside the domain of the table it indexes.
    #[error("{stat} {value} is out of range ({min}..={max})")]
    OutOfRange {
        /// Name of the stat or table being indexed.
        stat: &'static str,
        /// The rejected value.
        value: u32,
        /// Lowest accepted value.
        min: u32,
        /// Highest accepted value.
        max: u32,
    },

    /// A decrement would take an attribute below the class's starting value.
    #[error("{attribute} cannot go below the class minimum of {minimum}")]
    AttributeAtMinimum {
        /// The attribute that was changed.
        attribute: Attribute,
        /// The class's starting value for it.
        minimum: u32,
    },

    /// An increment would take an attribute above the cap.
    #[error("{attribute} cannot go above {maximum}")]
    AttributeAtMaximum {
        /// The attribute that was changed.
        attribute: Attribute,
        /// The attribute cap.
        maximum: u32,
    },

    /// Undo was requested with no earlier build to return to.
    #[error("nothing to undo")]
    NothingToUndo,

    /// A planner command was not recognized.
    #[error("unknown command: {0}. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    /// A reference-data error, such as an unknown class name.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for progression operations.
pub type ProgressionResult<T> = Result<T, ProgressionError>;
