use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Address list JSON (`address`, `count`, `coords`).
    #[arg(long, value_name = "FILE")]
    pub addresses: PathBuf,
    /// Results to show before the "N more" line. Defaults to
    /// `TEIKNINGAR_SEARCH_MAX_RESULTS`.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct MapArgs {
    #[arg(long, value_name = "FILE")]
    pub addresses: PathBuf,
    #[arg(long, allow_negative_numbers = true)]
    pub south: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub west: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub north: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub east: f64,
}

/// Picks one blueprint out of an address's blueprint list.
#[derive(Debug, Args)]
pub struct BlueprintSelector {
    #[arg(long, value_name = "FILE")]
    pub blueprints: PathBuf,
    #[arg(long)]
    pub hash: String,
}

#[derive(Debug, Args)]
pub struct ZoomArgs {
    #[command(flatten)]
    pub blueprint: BlueprintSelector,
    #[arg(long, allow_negative_numbers = true)]
    pub pointer_x: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub pointer_y: f64,
    /// Displayed image rectangle as `left,top,width,height`.
    #[arg(long, value_name = "RECT", value_parser = parse_rect, allow_hyphen_values = true)]
    pub image: [f64; 4],
    /// Scroll container rectangle as `left,top,width,height`.
    #[arg(long, value_name = "RECT", value_parser = parse_rect, allow_hyphen_values = true)]
    pub container: [f64; 4],
}

#[derive(Debug, Args)]
pub struct StateArgs {
    #[command(subcommand)]
    pub command: StateCommand,
}

#[derive(Debug, Subcommand)]
pub enum StateCommand {
    Show,
}

fn parse_rect(raw: &str) -> Result<[f64; 4], String> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid number '{}': {e}", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; 4]>::try_from(values)
        .map_err(|values| format!("expected left,top,width,height; got {} values", values.len()))
}
