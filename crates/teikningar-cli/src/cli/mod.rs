use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
mod preferences;


pub use args::{BlueprintSelector, MapArgs, SearchArgs, StateArgs, StateCommand, ZoomArgs};
pub use preferences::{FavoriteArgs, FavoriteCommand, PreferenceAddArgs, RecentArgs, RecentCommand};

#[derive(Debug, Parser)]
#[command(name = "teikningar")]
#[command(about = "Search and bookmark archived Reykjavík building blueprints", version)]
pub struct Cli {
    #[arg(long, default_value = ".teikningar")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Search(SearchArgs),
    Map(MapArgs),
    Favorite(FavoriteArgs),
    Recent(RecentArgs),
    Zoom(ZoomArgs),
    State(StateArgs),
}

impl Commands {
    /// Operation name carried in error payloads.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::Map(_) => "map",
            Self::Favorite(args) => match args.command {
                FavoriteCommand::Add(_) => "favorite.add",
                FavoriteCommand::Remove(_) => "favorite.remove",
                FavoriteCommand::List => "favorite.list",
            },
            Self::Recent(args) => match args.command {
                RecentCommand::Add(_) => "recent.add",
                RecentCommand::List => "recent.list",
            },
            Self::Zoom(_) => "zoom",
            Self::State(_) => "state.show",
        }
    }
}
