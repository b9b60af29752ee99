//! Static lookup tables for secondary statistics and level-up costs.
//!
//! Attribute tables are indexed directly by the attribute value: index 0 is
//! unused and holds zero, index `v` is the stat at attribute `v`, up to 99.
//! Every table is non-decreasing over `1..=99`.

/// Number of rows in each attribute table (index 0 through 99).
pub const ATTRIBUTE_TABLE_LEN: usize = 100;

/// Health by vigor.
pub const HEALTH_TABLE: [u32; ATTRIBUTE_TABLE_LEN] = [
    0, 300, 304, 312, 322, 334, 347, 362, 378, 396,
    414, 434, 455, 476, 499, 522, 547, 572, 598, 624,
    652, 680, 709, 738, 769, 800, 833, 870, 910, 951,
    994, 1037, 1081, 1125, 1170, 1216, 1262, 1308, 1355, 1402,
    1450, 1476, 1503, 1529, 1555, 1581, 1606, 1631, 1656, 1680,
    1704, 1727, 1750, 1772, 1793, 1814, 1834, 1853, 1871, 1887,
    1900, 1906, 1912, 1918, 1924, 1930, 1936, 1942, 1948, 1954,
    1959, 1965, 1971, 1977, 1982, 1988, 1993, 1999, 2004, 2010,
    2015, 2020, 2026, 2031, 2036, 2041, 2046, 2051, 2056, 2060,
    2065, 2070, 2074, 2078, 2082, 2086, 2090, 2094, 2097, 2100,
];

/// Focus points by mind.
pub const FOCUS_TABLE: [u32; ATTRIBUTE_TABLE_LEN] = [
    0, 40, 43, 46, 49, 52, 55, 58, 62, 65,
    68, 71, 74, 77, 81, 84, 87, 90, 93, 96,
    100, 106, 112, 118, 124, 130, 136, 142, 148, 154,
    160, 166, 172, 178, 184, 190, 196, 202, 208, 214,
    220, 226, 232, 238, 244, 250, 256, 262, 268, 274,
    280, 288, 297, 305, 313, 321, 328, 335, 341, 346,
    350, 352, 355, 357, 360, 362, 365, 367, 370, 373,
    375, 378, 380, 383, 385, 388, 391, 393, 396, 398,
    401, 403, 406, 408, 411, 414, 416, 419, 421, 424,
    426, 429, 432, 434, 437, 439, 442, 444, 447, 450,
];

/// Stamina by endurance.
pub const STAMINA_TABLE: [u32; ATTRIBUTE_TABLE_LEN] = [
    0, 80, 81, 82, 84, 85, 87, 88, 90, 91,
    92, 94, 95, 97, 98, 100, 101, 103, 105, 106,
    108, 110, 111, 113, 115, 116, 118, 120, 121, 123,
    125, 126, 128, 129, 131, 132, 134, 135, 137, 138,
    140, 141, 143, 144, 146, 147, 149, 150, 152, 153,
    155, 155, 155, 155, 156, 156, 156, 157, 157, 157,
    158, 158, 158, 158, 159, 159, 159, 160, 160, 160,
    161, 161, 161, 162, 162, 162, 162, 163, 163, 163,
    164, 164, 164, 165, 165, 165, 166, 166, 166, 166,
    167, 167, 167, 168, 168, 168, 169, 169, 169, 170,
];

/// Maximum equip load by endurance.
pub const EQUIP_LOAD_TABLE: [f64; ATTRIBUTE_TABLE_LEN] = [
    0.0, 45.0, 45.0, 45.0, 45.0, 45.0, 45.0, 45.0, 45.0, 46.6,
    48.2, 49.8, 51.4, 52.9, 54.5, 56.1, 57.7, 59.3, 60.9, 62.5,
    64.1, 65.6, 67.2, 68.8, 70.4, 72.0, 73.0, 74.1, 75.2, 76.4,
    77.6, 78.9, 80.2, 81.5, 82.8, 84.1, 85.4, 86.8, 88.1, 89.5,
    90.9, 92.3, 93.7, 95.1, 96.5, 97.9, 99.4, 100.8, 102.2, 103.7,
    105.2, 106.6, 108.1, 109.6, 111.0, 112.5, 114.0, 115.5, 117.0, 118.5,
    120.0, 121.0, 122.1, 123.1, 124.1, 125.1, 126.2, 127.2, 128.2, 129.2,
    130.3, 131.3, 132.3, 133.3, 134.4, 135.4, 136.4, 137.4, 138.5, 139.5,
    140.5, 141.5, 142.6, 143.6, 144.6, 145.6, 146.7, 147.7, 148.7, 149.7,
    150.8, 151.8, 152.8, 153.8, 154.9, 155.9, 156.9, 157.9, 159.0, 160.0,
];

/// Highest reachable level: every attribute at 99 from the lowest starting
/// total of 80 points at level 1.
pub const MAX_LEVEL: u32 = 713;

/// Number of rows in the level tables (index 0 through [`MAX_LEVEL`]).
pub const LEVEL_TABLE_LEN: usize = MAX_LEVEL as usize + 1;

/// Runes needed to go from level `L` to `L + 1`, indexed by `L`.
///
/// Index 0 is unused. Index [`MAX_LEVEL`] is the zero sentinel: there is no
/// next level to buy.
pub const RUNE_COST_TABLE: [u64; LEVEL_TABLE_LEN] = build_cost_table();

/// Runes spent in total to reach level `L` from level 1, indexed by `L`.
pub const RUNES_SPENT_TABLE: [u64; LEVEL_TABLE_LEN] = build_spent_table(&RUNE_COST_TABLE);

/// Level-up cost formula: `floor((max(0, n - 92) * 0.02 + 0.1) * n^2) + 1`
/// with `n = level + 81`, evaluated exactly in integers.
const fn level_up_cost(level: u32) -> u64 {
    let n = level as u64 + 81;
    let band = n.saturating_sub(92);
    n * n * (2 * band + 10) / 100 + 1
}

const fn build_cost_table() -> [u64; LEVEL_TABLE_LEN] {
    let mut table = [0; LEVEL_TABLE_LEN];
    let mut level = 1;
    while level < MAX_LEVEL {
        table[level as usize] = level_up_cost(level);
        level += 1;
    }
    table
}

const fn build_spent_table(costs: &[u64; LEVEL_TABLE_LEN]) -> [u64; LEVEL_TABLE_LEN] {
    let mut table = [0; LEVEL_TABLE_LEN];
    let mut level = 2;
    while level < LEVEL_TABLE_LEN {
        table[level] = table[level - 1] + costs[level - 1];
        level += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn attribute_tables_start_at_zero() {
        assert_eq!(HEALTH_TABLE[0], 0);
        assert_eq!(FOCUS_TABLE[0], 0);
        assert_eq!(STAMINA_TABLE[0], 0);
        assert!(EQUIP_LOAD_TABLE[0].abs() < f64::EPSILON);
    }

    #[test]
    fn attribute_table_endpoints() {
        assert_eq!(HEALTH_TABLE[1], 300);
        assert_eq!(HEALTH_TABLE[99], 2100);
        assert_eq!(FOCUS_TABLE[99], 450);
        assert_eq!(STAMINA_TABLE[99], 170);
        assert!((EQUIP_LOAD_TABLE[99] - 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn first_level_costs() {
        assert_eq!(RUNE_COST_TABLE[1], 673);
        assert_eq!(RUNE_COST_TABLE[2], 689);
        assert_eq!(RUNES_SPENT_TABLE[1], 0);
        assert_eq!(RUNES_SPENT_TABLE[2], 673);
        assert_eq!(RUNES_SPENT_TABLE[3], 673 + 689);
    }

    #[test]
    fn cost_band_changes_after_level_eleven() {
        // n = 92 is the last level on the flat 0.1 multiplier.
        assert_eq!(RUNE_COST_TABLE[11], 847);
        assert_eq!(RUNE_COST_TABLE[12], 1038);
    }

    #[test]
    fn max_level_is_sentinel() {
        assert_eq!(RUNE_COST_TABLE[MAX_LEVEL as usize], 0);
        assert!(RUNES_SPENT_TABLE[MAX_LEVEL as usize] > 0);
    }

    proptest! {
        #[test]
        fn attribute_tables_are_non_decreasing(v in 1usize..99) {
            prop_assert!(HEALTH_TABLE[v] <= HEALTH_TABLE[v + 1]);
            prop_assert!(FOCUS_TABLE[v] <= FOCUS_TABLE[v + 1]);
            prop_assert!(STAMINA_TABLE[v] <= STAMINA_TABLE[v + 1]);
            prop_assert!(EQUIP_LOAD_TABLE[v] <= EQUIP_LOAD_TABLE[v + 1]);
        }

        #[test]
        fn spent_is_running_sum(level in 2usize..LEVEL_TABLE_LEN) {
            prop_assert_eq!(
                RUNES_SPENT_TABLE[level],
                RUNES_SPENT_TABLE[level - 1] + RUNE_COST_TABLE[level - 1]
            );
        }

        #[test]
        fn cost_grows_with_level(level in 1usize..(MAX_LEVEL as usize - 1)) {
            prop_assert!(RUNE_COST_TABLE[level] < RUNE_COST_TABLE[level + 1]);
        }
    }
}
