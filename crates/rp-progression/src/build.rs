//! Build snapshots.
//!
//! A [`Build`] is the complete, always-consistent state of a planned
//! character: its class, current attributes, derived stats and level. Builds
//! are never mutated; every change returns a new snapshot.

use std::fmt;

use serde::Serialize;

use rp_core::{Attribute, AttributeSet, CharacterClass, MAX_ATTRIBUTE};

use crate::config::PlannerConfig;
use crate::derive::{LevelCost, derive_cost, derive_level};
use crate::error::{ProgressionError, ProgressionResult};
use crate::secondary::{DerivationInput, SecondaryStats};

/// A character build: class, attributes, and everything derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Build {
    class: CharacterClass,
    level: u32,
    attributes: AttributeSet,
    derived: SecondaryStats,
    #[serde(skip)]
    base_discovery: u32,
}

impl Build {
    /// A fresh build at the class's starting attributes, with default rules.
    pub fn new(class: CharacterClass) -> ProgressionResult<Self> {
        Self::with_config(class, &PlannerConfig::default())
    }

    /// A fresh build at the class's starting attributes.
    pub fn with_config(class: CharacterClass, config: &PlannerConfig) -> ProgressionResult<Self> {
        let attributes = class.base_attributes;
        Self::assemble(class, attributes, config.base_discovery + attributes.arcane)
    }

    /// A build with explicit attributes, each within `[class minimum, 99]`.
    pub fn with_attributes(
        class: CharacterClass,
        attributes: AttributeSet,
        config: &PlannerConfig,
    ) -> ProgressionResult<Self> {
        for (attribute, value) in attributes.iter() {
            let minimum = class.base_attributes.get(attribute);
            if !(minimum..=MAX_ATTRIBUTE).contains(&value) {
                return Err(ProgressionError::OutOfRange {
                    stat: attribute.name(),
                    value,
                    min: minimum,
                    max: MAX_ATTRIBUTE,
                });
            }
        }
        let base_discovery = config.base_discovery + class.base_attributes.arcane;
        Self::assemble(class, attributes, base_discovery)
    }

    fn assemble(
        class: CharacterClass,
        attributes: AttributeSet,
        base_discovery: u32,
    ) -> ProgressionResult<Self> {
        let input = DerivationInput {
            attributes: &attributes,
            base: &class.base_attributes,
            base_discovery,
        };
        let derived = SecondaryStats::derive(&input)?;
        let level = derive_level(&attributes, &class.base_attributes, class.level);
        Ok(Self {
            class,
            level,
            attributes,
            derived,
            base_discovery,
        })
    }

    /// The class this build started from.
    pub fn class(&self) -> &CharacterClass {
        &self.class
    }

    /// Current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current attribute scores.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Derived secondary stats.
    pub fn derived(&self) -> &SecondaryStats {
        &self.derived
    }

    /// True if `attribute` can be raised by one.
    pub fn can_increment(&self, attribute: Attribute) -> bool {
        self.attributes.get(attribute) < MAX_ATTRIBUTE
    }

    /// True if `attribute` can be lowered by one without dropping below the
    /// class's starting value.
    pub fn can_decrement(&self, attribute: Attribute) -> bool {
        self.attributes.get(attribute) > self.class.base_attributes.get(attribute)
    }

    /// Raise `attribute` by one.
    pub fn increment(&self, attribute: Attribute) -> ProgressionResult<Self> {
        self.adjust(attribute, 1)
    }

    /// Lower `attribute` by one.
    pub fn decrement(&self, attribute: Attribute) -> ProgressionResult<Self> {
        self.adjust(attribute, -1)
    }

    /// Change `attribute` by `delta`.
    ///
    /// The change is rejected, not clamped, if it would leave the attribute
    /// below the class minimum or above 99.
    pub fn adjust(&self, attribute: Attribute, delta: i32) -> ProgressionResult<Self> {
        let current = i64::from(self.attributes.get(attribute));
        let target = current + i64::from(delta);
        let minimum = self.class.base_attributes.get(attribute);

        if target > i64::from(MAX_ATTRIBUTE) {
            tracing::debug!(%attribute, target, "rejected increment past cap");
            return Err(ProgressionError::AttributeAtMaximum {
                attribute,
                maximum: MAX_ATTRIBUTE,
            });
        }
        if target < i64::from(minimum) {
            tracing::debug!(%attribute, target, "rejected decrement below class minimum");
            return Err(ProgressionError::AttributeAtMinimum { attribute, minimum });
        }

        let attributes = self.attributes.with(attribute, target as u32);
        let input = DerivationInput {
            attributes: &attributes,
            base: &self.class.base_attributes,
            base_discovery: self.base_discovery,
        };
        let derived = self.derived.refresh(attribute, &input)?;
        let level = derive_level(&attributes, &self.class.base_attributes, self.class.level);

        Ok(Self {
            class: self.class.clone(),
            level,
            attributes,
            derived,
            base_discovery: self.base_discovery,
        })
    }

    /// Back to the class's starting attributes.
    pub fn respec(&self) -> ProgressionResult<Self> {
        Self::assemble(
            self.class.clone(),
            self.class.base_attributes,
            self.base_discovery,
        )
    }

    /// Rune cost at the current level.
    pub fn cost(&self) -> ProgressionResult<LevelCost> {
        derive_cost(self.level)
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (level {})", self.class.name.to_uppercase(), self.level)?;
        for (attribute, value) in self.attributes.iter() {
            let floor = self.class.base_attributes.get(attribute);
            let marker = if value > floor {
                format!(" (+{})", value - floor)
            } else {
                String::new()
            };
            writeln!(f, "  {:<13}{value:>3}{marker}", attribute.name())?;
        }
        write!(f, " ")?;
        for (label, value) in self.derived.rows() {
            write!(f, " {label}: {value} |")?;
        }
        match self.cost() {
            Ok(cost) if cost.points_to_next > 0 => {
                write!(f, " next level: {} runes", cost.points_to_next)
            }
            _ => write!(f, " max level"),
        }
    }
}
