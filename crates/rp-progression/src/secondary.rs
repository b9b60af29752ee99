//! Secondary statistics and the attribute-to-derivation map.

use serde::Serialize;

use rp_core::{Attribute, AttributeSet};

use crate::derive::{
    derive_discovery, derive_focus, derive_health, derive_poise, derive_stamina_and_load,
};
use crate::error::ProgressionResult;

/// Everything a derivation may read.
#[derive(Debug, Clone, Copy)]
pub struct DerivationInput<'a> {
    /// Current attribute scores.
    pub attributes: &'a AttributeSet,
    /// The class's starting attribute scores.
    pub base: &'a AttributeSet,
    /// Item discovery the class starts with.
    pub base_discovery: u32,
}

/// Recomputes the secondary stats one attribute drives.
pub type Derivation = fn(&mut SecondaryStats, &DerivationInput<'_>) -> ProgressionResult<()>;

/// Which secondary stats each attribute drives.
///
/// Attributes missing from this list (strength, dexterity, intelligence,
/// faith) only affect level.
pub const DERIVATIONS: &[(Attribute, Derivation)] = &[
    (Attribute::Vigor, apply_health),
    (Attribute::Mind, apply_focus),
    (Attribute::Endurance, apply_stamina_and_load),
    (Attribute::Arcane, apply_discovery),
];

fn apply_health(stats: &mut SecondaryStats, input: &DerivationInput<'_>) -> ProgressionResult<()> {
    stats.health = derive_health(input.attributes.vigor)?;
    Ok(())
}

fn apply_focus(stats: &mut SecondaryStats, input: &DerivationInput<'_>) -> ProgressionResult<()> {
    stats.focus_points = derive_focus(input.attributes.mind)?;
    Ok(())
}

fn apply_stamina_and_load(
    stats: &mut SecondaryStats,
    input: &DerivationInput<'_>,
) -> ProgressionResult<()> {
    let derived = derive_stamina_and_load(input.attributes.endurance)?;
    stats.stamina = derived.stamina;
    stats.equip_load = derived.equip_load;
    Ok(())
}

fn apply_discovery(
    stats: &mut SecondaryStats,
    input: &DerivationInput<'_>,
) -> ProgressionResult<()> {
    stats.item_discovery = derive_discovery(
        input.attributes.arcane,
        input.base.arcane,
        input.base_discovery,
    )?;
    Ok(())
}

/// Derived, read-only statistics of a build.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SecondaryStats {
    /// Hit points.
    pub health: u32,
    /// Focus points.
    pub focus_points: u32,
    /// Stamina.
    pub stamina: u32,
    /// Maximum equip load.
    pub equip_load: f64,
    /// Poise.
    pub poise: u32,
    /// Item discovery.
    pub item_discovery: u32,
}

impl SecondaryStats {
    /// Compute every secondary stat from scratch.
    pub fn derive(input: &DerivationInput<'_>) -> ProgressionResult<Self> {
        let mut stats = Self {
            poise: derive_poise(),
            ..Self::default()
        };
        for (_, derivation) in DERIVATIONS {
            derivation(&mut stats, input)?;
        }
        Ok(stats)
    }

    /// Copy of these stats with the ones driven by `attribute` recomputed.
    pub fn refresh(
        &self,
        attribute: Attribute,
        input: &DerivationInput<'_>,
    ) -> ProgressionResult<Self> {
        let mut stats = *self;
        for (_, derivation) in DERIVATIONS.iter().filter(|(a, _)| *a == attribute) {
            tracing::trace!(%attribute, "recomputing derived stats");
            derivation(&mut stats, input)?;
        }
        Ok(stats)
    }

    /// Display rows as `(label, value)` pairs in sheet order.
    pub fn rows(&self) -> [(&'static str, String); 6] {
        [
            ("hp", self.health.to_string()),
            ("fp", self.focus_points.to_string()),
            ("stamina", self.stamina.to_string()),
            ("equip load", format!("{:.1}", self.equip_load)),
            ("poise", self.poise.to_string()),
            ("discovery", self.item_discovery.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(attributes: &'a AttributeSet, base: &'a AttributeSet) -> DerivationInput<'a> {
        DerivationInput {
            attributes,
            base,
            base_discovery: 100 + base.arcane,
        }
    }

    #[test]
    fn derive_default_build() {
        let base = AttributeSet::uniform(10);
        let stats = SecondaryStats::derive(&input(&base, &base)).unwrap();
        assert_eq!(stats.health, 414);
        assert_eq!(stats.focus_points, 68);
        assert_eq!(stats.stamina, 92);
        assert!((stats.equip_load - 48.2).abs() < 1e-9);
        assert_eq!(stats.poise, 0);
        assert_eq!(stats.item_discovery, 110);
    }

    #[test]
    fn refresh_only_touches_mapped_stats() {
        let base = AttributeSet::uniform(10);
        let before = SecondaryStats::derive(&input(&base, &base)).unwrap();
        let after_attrs = base.with(Attribute::Strength, 30);
        let after = before
            .refresh(Attribute::Strength, &input(&after_attrs, &base))
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn refresh_agrees_with_full_derive() {
        let base = AttributeSet::uniform(10);
        let before = SecondaryStats::derive(&input(&base, &base)).unwrap();
        for attribute in Attribute::ALL {
            let changed = base.with(attribute, 42);
            let refreshed = before.refresh(attribute, &input(&changed, &base)).unwrap();
            let full = SecondaryStats::derive(&input(&changed, &base)).unwrap();
            assert_eq!(refreshed, full, "{attribute}");
        }
    }

    #[test]
    fn derive_rejects_out_of_range_attribute() {
        let base = AttributeSet::uniform(10);
        let bad = base.with(Attribute::Vigor, 0);
        assert!(SecondaryStats::derive(&input(&bad, &base)).is_err());
    }

    #[test]
    fn rows_format_equip_load() {
        let base = AttributeSet::uniform(10);
        let stats = SecondaryStats::derive(&input(&base, &base)).unwrap();
        let rows = stats.rows();
        assert_eq!(rows[0], ("hp", "414".to_string()));
        assert_eq!(rows[3], ("equip load", "48.2".to_string()));
    }
}
