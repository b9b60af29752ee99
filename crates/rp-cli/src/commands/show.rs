use std::path::Path;

use colored::Colorize;
use rp_core::Attribute;
use rp_progression::{Build, PlannerConfig};

pub fn run(data: Option<&Path>, class_name: &str, set: &[String], json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;
    let class = catalog.get(class_name).map_err(|e| e.to_string())?.clone();

    let mut attributes = class.base_attributes;
    for assignment in set {
        let (attribute, value) = parse_assignment(assignment)?;
        attributes = attributes.with(attribute, value);
    }

    let build = Build::with_attributes(class, attributes, &PlannerConfig::default())
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&build).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print_sheet(&build);
    Ok(())
}

/// Parse `attr=value`.
fn parse_assignment(text: &str) -> Result<(Attribute, u32), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected ATTR=VALUE, got \"{text}\""))?;
    let attribute: Attribute = name.parse().map_err(|e: rp_core::CoreError| e.to_string())?;
    let value = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid value for {attribute}: \"{}\"", value.trim()))?;
    Ok((attribute, value))
}

fn print_sheet(build: &Build) {
    let floor = &build.class().base_attributes;
    println!(
        "  {} [level {}]",
        build.class().name.to_uppercase().bold(),
        build.level()
    );
    println!();

    for (attribute, value) in build.attributes().iter() {
        let base = floor.get(attribute);
        let gained = if value > base {
            format!("+{}", value - base).green().to_string()
        } else {
            String::new()
        };
        println!("  {:<13} {value:>3} {gained}", attribute.name());
    }
    println!();

    for (label, value) in build.derived().rows() {
        println!("  {label:<13} {value}");
    }

    if let Ok(cost) = build.cost() {
        println!();
        if cost.points_to_next == 0 {
            println!("  runes:        {}", "max level".dimmed());
        } else {
            println!("  runes:        {} to next level", cost.points_to_next);
        }
        println!("  spent:        {}", cost.total_spent);
    }
}
