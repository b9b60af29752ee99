use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rp_core::Attribute;

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Class".to_string(), "Lvl".to_string()];
    header.extend(Attribute::ALL.iter().map(|a| a.abbreviation().to_uppercase()));
    table.set_header(header);

    for class in catalog.iter() {
        let mut row = vec![class.name.clone(), class.level.to_string()];
        row.extend(class.base_attributes.iter().map(|(_, v)| v.to_string()));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} classes", catalog.len());

    Ok(())
}
