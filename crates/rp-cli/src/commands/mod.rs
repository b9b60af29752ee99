pub mod classes;
pub mod cost;
pub mod plan;
pub mod show;
pub mod table;

use std::path::Path;

use rp_core::ClassCatalog;

/// Load the class catalog from `data`, or the built-in list if `None`.
fn load_catalog(data: Option<&Path>) -> Result<ClassCatalog, String> {
    let Some(path) = data else {
        return ClassCatalog::builtin().map_err(|e| e.to_string());
    };

    tracing::debug!(path = %path.display(), "loading class data");
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    ClassCatalog::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}
