use comfy_table::{ContentArrangement, Table};
use rp_progression::tables::{
    EQUIP_LOAD_TABLE, FOCUS_TABLE, HEALTH_TABLE, MAX_LEVEL, RUNE_COST_TABLE, RUNES_SPENT_TABLE,
    STAMINA_TABLE,
};

#[derive(Clone, Copy)]
enum Lookup {
    Health,
    Focus,
    Stamina,
    EquipLoad,
    Runes,
}

impl Lookup {
    fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "health" | "hp" => Some(Self::Health),
            "focus" | "fp" => Some(Self::Focus),
            "stamina" => Some(Self::Stamina),
            "equip-load" | "load" => Some(Self::EquipLoad),
            "runes" | "cost" => Some(Self::Runes),
            _ => None,
        }
    }

    fn headers(self) -> Vec<&'static str> {
        match self {
            Self::Health => vec!["Vigor", "HP"],
            Self::Focus => vec!["Mind", "FP"],
            Self::Stamina => vec!["Endurance", "Stamina"],
            Self::EquipLoad => vec!["Endurance", "Equip Load"],
            Self::Runes => vec!["Level", "To Next", "Spent"],
        }
    }

    fn last_row(self) -> u32 {
        match self {
            Self::Runes => MAX_LEVEL,
            _ => 99,
        }
    }

    fn row(self, index: u32) -> Vec<String> {
        let i = index as usize;
        let mut cells = vec![index.to_string()];
        match self {
            Self::Health => cells.push(HEALTH_TABLE[i].to_string()),
            Self::Focus => cells.push(FOCUS_TABLE[i].to_string()),
            Self::Stamina => cells.push(STAMINA_TABLE[i].to_string()),
            Self::EquipLoad => cells.push(format!("{:.1}", EQUIP_LOAD_TABLE[i])),
            Self::Runes => {
                cells.push(RUNE_COST_TABLE[i].to_string());
                cells.push(RUNES_SPENT_TABLE[i].to_string());
            }
        }
        cells
    }
}

pub fn run(stat: &str, from: Option<u32>, to: Option<u32>) -> Result<(), String> {
    let lookup = Lookup::parse(stat).ok_or_else(|| {
        format!("unknown table \"{stat}\" (expected health, focus, stamina, equip-load, runes)")
    })?;

    let last = lookup.last_row();
    let start = from.unwrap_or(1);
    let end = to.unwrap_or(last);
    if start < 1 || end > last || start > end {
        return Err(format!("row range {start}..={end} is outside 1..={last}"));
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(lookup.headers());

    for index in start..=end {
        table.add_row(lookup.row(index));
    }

    println!("{table}");
    Ok(())
}
