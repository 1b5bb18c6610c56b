use clap::{Args, Subcommand};

use super::BlueprintSelector;

#[derive(Debug, Args)]
pub struct PreferenceAddArgs {
    #[command(flatten)]
    pub blueprint: BlueprintSelector,
    /// Address the blueprint was opened from. Defaults to the blueprint's own
    /// address.
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Args)]
pub struct FavoriteArgs {
    #[command(subcommand)]
    pub command: FavoriteCommand,
}

#[derive(Debug, Subcommand)]
pub enum FavoriteCommand {
    Add(PreferenceAddArgs),
    Remove(BlueprintSelector),
    List,
}

#[derive(Debug, Args)]
pub struct RecentArgs {
    #[command(subcommand)]
    pub command: RecentCommand,
}

#[derive(Debug, Subcommand)]
pub enum RecentCommand {
    Add(PreferenceAddArgs),
    List,
}
