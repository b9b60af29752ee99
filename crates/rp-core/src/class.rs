use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeSet, MAX_ATTRIBUTE, MIN_ATTRIBUTE};
use crate::error::{CoreError, CoreResult};

/// A named starting template: starting level plus starting attributes.
///
/// The starting attributes double as the floor for each attribute; a build
/// may never drop below what its class started with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    /// Unique class name (e.g. "wretch").
    pub name: String,
    /// Level the class starts at.
    pub level: u32,
    /// Starting attribute scores.
    pub base_attributes: AttributeSet,
}

impl CharacterClass {
    /// Create a class from its parts.
    pub fn new(name: impl Into<String>, level: u32, base_attributes: AttributeSet) -> Self {
        Self {
            name: name.into(),
            level,
            base_attributes,
        }
    }

    /// Check the data rules a loaded class must satisfy.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidData("class name is empty".to_string()));
        }
        if self.level == 0 {
            return Err(CoreError::InvalidData(format!(
                "class \"{}\" has starting level 0",
                self.name
            )));
        }
        if let Some((attribute, value)) = self.base_attributes.first_out_of_range() {
            return Err(CoreError::InvalidData(format!(
                "class \"{}\": {attribute} is {value}, expected {MIN_ATTRIBUTE}..={MAX_ATTRIBUTE}",
                self.name
            )));
        }
        Ok(())
    }
}

/// On-disk shape of one entry in `characters.json`.
///
/// Any precomputed `generalStats` block is ignored; secondary stats are
/// always derived from the attributes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClassRecord {
    pub class: String,
    pub level: u32,
    pub player_stats: AttributeSet,
}

impl ClassRecord {
    /// Convert into a class, checking that the record agrees with its key.
    pub(crate) fn into_class(self, key: &str) -> CoreResult<CharacterClass> {
        if !self.class.eq_ignore_ascii_case(key) {
            return Err(CoreError::InvalidData(format!(
                "entry \"{key}\" names class \"{}\"",
                self.class
            )));
        }
        let class = CharacterClass::new(key, self.level, self.player_stats);
        class.validate()?;
        Ok(class)
    }
}
