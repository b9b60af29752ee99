use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lowest value any attribute can hold in the reference data.
pub const MIN_ATTRIBUTE: u32 = 1;

/// Highest value any attribute can be raised to.
pub const MAX_ATTRIBUTE: u32 = 99;

/// One of the eight primary stats a build allocates points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Governs health.
    Vigor,
    /// Governs focus points.
    Mind,
    /// Governs stamina and equip load.
    Endurance,
    /// Physical power.
    Strength,
    /// Agility and finesse.
    Dexterity,
    /// Sorcery scaling.
    Intelligence,
    /// Incantation scaling.
    Faith,
    /// Governs item discovery.
    Arcane,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 8] = [
        Attribute::Vigor,
        Attribute::Mind,
        Attribute::Endurance,
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Intelligence,
        Attribute::Faith,
        Attribute::Arcane,
    ];

    /// Lowercase full name, as used in the reference data.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vigor => "vigor",
            Self::Mind => "mind",
            Self::Endurance => "endurance",
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Intelligence => "intelligence",
            Self::Faith => "faith",
            Self::Arcane => "arcane",
        }
    }

    /// Three-letter abbreviation shown in compact tables.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Vigor => "vig",
            Self::Mind => "min",
            Self::Endurance => "end",
            Self::Strength => "str",
            Self::Dexterity => "dex",
            Self::Intelligence => "int",
            Self::Faith => "fai",
            Self::Arcane => "arc",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    /// Parse a full name or abbreviation, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lower || a.abbreviation() == lower)
            .ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

/// The eight primary attribute scores of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Vigor score.
    pub vigor: u32,
    /// Mind score.
    pub mind: u32,
    /// Endurance score.
    pub endurance: u32,
    /// Strength score.
    pub strength: u32,
    /// Dexterity score.
    pub dexterity: u32,
    /// Intelligence score.
    pub intelligence: u32,
    /// Faith score.
    pub faith: u32,
    /// Arcane score.
    pub arcane: u32,
}

impl AttributeSet {
    /// A set with every attribute at the same value.
    pub fn uniform(value: u32) -> Self {
        Self {
            vigor: value,
            mind: value,
            endurance: value,
            strength: value,
            dexterity: value,
            intelligence: value,
            faith: value,
            arcane: value,
        }
    }

    /// Read one attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Vigor => self.vigor,
            Attribute::Mind => self.mind,
            Attribute::Endurance => self.endurance,
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Faith => self.faith,
            Attribute::Arcane => self.arcane,
        }
    }

    /// Mutable access to one attribute.
    pub fn get_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Vigor => &mut self.vigor,
            Attribute::Mind => &mut self.mind,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Faith => &mut self.faith,
            Attribute::Arcane => &mut self.arcane,
        }
    }

    /// Copy of this set with one attribute replaced.
    pub fn with(mut self, attribute: Attribute, value: u32) -> Self {
        *self.get_mut(attribute) = value;
        self
    }

    /// Iterate `(attribute, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Sum of all eight scores.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// The first attribute outside `[MIN_ATTRIBUTE, MAX_ATTRIBUTE]`, if any.
    pub fn first_out_of_range(&self) -> Option<(Attribute, u32)> {
        self.iter()
            .find(|(_, v)| !(MIN_ATTRIBUTE..=MAX_ATTRIBUTE).contains(v))
    }
}
