use colored::Colorize;
use rp_progression::{derive_cost, runes_between};

pub fn run(level: u32, to: Option<u32>) -> Result<(), String> {
    let cost = derive_cost(level).map_err(|e| e.to_string())?;

    if let Some(target) = to {
        let runes = runes_between(level, target).map_err(|e| e.to_string())?;
        println!(
            "  {} runes from level {level} to level {target}",
            runes.to_string().bold()
        );
        return Ok(());
    }

    println!("  {} {level}", "Level".bold());
    if cost.points_to_next == 0 {
        println!("  next level:  {}", "maximum reached".dimmed());
    } else {
        println!("  next level:  {} runes", cost.points_to_next);
    }
    println!("  total spent: {} runes", cost.total_spent);

    Ok(())
}
