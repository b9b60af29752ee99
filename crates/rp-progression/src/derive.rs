//! Pure derivations from attributes and levels to secondary numbers.
//!
//! Health, focus, stamina and equip load are non-linear and come straight out
//! of the tables in [`crate::tables`]. Item discovery is linear in arcane.
//! Level is the class's starting level plus every point invested above the
//! class baseline.

use serde::Serialize;

use rp_core::{AttributeSet, MAX_ATTRIBUTE, MIN_ATTRIBUTE};

use crate::error::{ProgressionError, ProgressionResult};
use crate::tables::{
    EQUIP_LOAD_TABLE, FOCUS_TABLE, HEALTH_TABLE, MAX_LEVEL, RUNE_COST_TABLE, RUNES_SPENT_TABLE,
    STAMINA_TABLE,
};

/// Stamina and equip load, both driven by endurance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StaminaAndLoad {
    /// Stamina.
    pub stamina: u32,
    /// Maximum equip load.
    pub equip_load: f64,
}

/// Rune cost at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelCost {
    /// Runes needed to buy the next level; zero at [`MAX_LEVEL`].
    pub points_to_next: u64,
    /// Runes spent to reach this level from level 1.
    pub total_spent: u64,
}

/// Reject attribute values outside `1..=99`.
fn check_attribute(stat: &'static str, value: u32) -> ProgressionResult<()> {
    if !(MIN_ATTRIBUTE..=MAX_ATTRIBUTE).contains(&value) {
        return Err(ProgressionError::OutOfRange {
            stat,
            value,
            min: MIN_ATTRIBUTE,
            max: MAX_ATTRIBUTE,
        });
    }
    Ok(())
}

fn lookup<T: Copy>(table: &[T], stat: &'static str, value: u32) -> ProgressionResult<T> {
    check_attribute(stat, value)?;
    Ok(table[value as usize])
}

/// Health at the given vigor.
pub fn derive_health(vigor: u32) -> ProgressionResult<u32> {
    lookup(&HEALTH_TABLE, "vigor", vigor)
}

/// Focus points at the given mind.
pub fn derive_focus(mind: u32) -> ProgressionResult<u32> {
    lookup(&FOCUS_TABLE, "mind", mind)
}

/// Stamina and equip load at the given endurance.
pub fn derive_stamina_and_load(endurance: u32) -> ProgressionResult<StaminaAndLoad> {
    Ok(StaminaAndLoad {
        stamina: lookup(&STAMINA_TABLE, "endurance", endurance)?,
        equip_load: lookup(&EQUIP_LOAD_TABLE, "endurance", endurance)?,
    })
}

/// Item discovery: the class's starting discovery offset by arcane gained.
///
/// `base_discovery` is the discovery the class starts with at `base_arcane`.
pub fn derive_discovery(
    arcane: u32,
    base_arcane: u32,
    base_discovery: u32,
) -> ProgressionResult<u32> {
    check_attribute("arcane", arcane)?;
    Ok((base_discovery + arcane).saturating_sub(base_arcane))
}

/// Poise from equipment. Armour is not modelled, so this is always zero.
pub fn derive_poise() -> u32 {
    0
}

/// Character level: starting level plus points invested above the baseline.
pub fn derive_level(attributes: &AttributeSet, base: &AttributeSet, base_level: u32) -> u32 {
    let invested: i64 = attributes
        .iter()
        .zip(base.iter())
        .map(|((_, current), (_, floor))| i64::from(current) - i64::from(floor))
        .sum();
    (i64::from(base_level) + invested).max(0) as u32
}

/// Rune cost at `level`, which must be in `1..=MAX_LEVEL`.
pub fn derive_cost(level: u32) -> ProgressionResult<LevelCost> {
    if !(1..=MAX_LEVEL).contains(&level) {
        return Err(ProgressionError::OutOfRange {
            stat: "level",
            value: level,
            min: 1,
            max: MAX_LEVEL,
        });
    }
    Ok(LevelCost {
        points_to_next: RUNE_COST_TABLE[level as usize],
        total_spent: RUNES_SPENT_TABLE[level as usize],
    })
}

/// Runes needed to climb from level `from` to level `to`.
///
/// Zero when `to <= from`.
pub fn runes_between(from: u32, to: u32) -> ProgressionResult<u64> {
    let start = derive_cost(from)?.total_spent;
    let end = derive_cost(to)?.total_spent;
    Ok(end.saturating_sub(start))
}
