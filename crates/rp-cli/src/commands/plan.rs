use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use rp_progression::{Planner, PlannerConfig};

pub fn run(data: Option<&Path>, class: &str) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;
    let config = PlannerConfig::default().with_starting_class(class);

    let mut planner =
        Planner::new(catalog, config).map_err(|e| format!("failed to start planner: {e}"))?;

    println!("  {} Build Planner", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", planner.build());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match planner.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
