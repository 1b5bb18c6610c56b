use std::io::{self, Write};
use std::{fs, path::Path};

use anyhow::{Context, Result};
use teikningar_core::TeikningarError;
use teikningar_core::catalog::{find_blueprint, parse_address_list, parse_blueprint_list};
use teikningar_core::models::{AddressRecord, BlueprintRecord};

use crate::cli::BlueprintSelector;

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn read_catalog(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(TeikningarError::from)
        .with_context(|| format!("failed to read {}", path.display()))
}

pub(super) fn load_addresses(path: &Path) -> Result<Vec<AddressRecord>> {
    let raw = read_catalog(path)?;
    parse_address_list(&raw)
        .with_context(|| format!("failed to parse address list {}", path.display()))
}

pub(super) fn select_blueprint(selector: &BlueprintSelector) -> Result<BlueprintRecord> {
    let raw = read_catalog(&selector.blueprints)?;
    let blueprints = parse_blueprint_list(&raw).with_context(|| {
        format!(
            "failed to parse blueprint list {}",
            selector.blueprints.display()
        )
    })?;
    let blueprint = find_blueprint(&blueprints, &selector.hash)
        .cloned()
        .ok_or_else(|| TeikningarError::NotFound(format!("blueprint {}", selector.hash)))?;
    Ok(blueprint)
}
