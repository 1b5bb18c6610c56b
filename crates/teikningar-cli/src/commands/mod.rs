use std::path::Path;

use anyhow::{Context, Result};
use teikningar_core::models::BlueprintRecord;
use teikningar_core::store::SqliteBackend;
use teikningar_core::viewport::visible_addresses_with;
use teikningar_core::zoom::{Point, Rect, ScrollOffset, ScrollSurface, ZoomClick};
use teikningar_core::{AppConfig, GeoBounds, ImageViewer, PreferenceStore, SearchIndex};

use crate::cli::{
    Commands, FavoriteCommand, MapArgs, PreferenceAddArgs, RecentCommand, SearchArgs, StateCommand,
    ZoomArgs,
};

mod support;

use self::support::{load_addresses, print_json, select_blueprint};

const STATE_FILE: &str = "state.db";

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    let config = AppConfig::from_env();
    tracing::debug!(root = %root.display(), operation = command.operation(), "running command");

    match command {
        Commands::Search(args) => run_search(&config, &args),
        Commands::Map(args) => run_map(&config, &args),
        Commands::Zoom(args) => run_zoom(&args),
        Commands::Favorite(args) => {
            let store = open_store(root, &config)?;
            match args.command {
                FavoriteCommand::Add(args) => {
                    let (blueprint, address) = resolve_entry(&args)?;
                    store.add_favorite(&blueprint, &address)?;
                    print_json(&serde_json::json!({
                        "status": "ok",
                        "favorite": true,
                        "originalHref": blueprint.original_source_url,
                    }))
                }
                FavoriteCommand::Remove(selector) => {
                    let blueprint = select_blueprint(&selector)?;
                    store.remove_favorite(&blueprint)?;
                    print_json(&serde_json::json!({
                        "status": "ok",
                        "favorite": false,
                        "originalHref": blueprint.original_source_url,
                    }))
                }
                FavoriteCommand::List => print_json(&store.favorites()),
            }
        }
        Commands::Recent(args) => {
            let store = open_store(root, &config)?;
            match args.command {
                RecentCommand::Add(args) => {
                    let (blueprint, address) = resolve_entry(&args)?;
                    store.add_recently_viewed(&blueprint, &address)?;
                    print_json(&serde_json::json!({
                        "status": "ok",
                        "recentlyViewed": store.recently_viewed().len(),
                        "originalHref": blueprint.original_source_url,
                    }))
                }
                RecentCommand::List => print_json(&store.recently_viewed()),
            }
        }
        Commands::State(args) => match args.command {
            StateCommand::Show => {
                let store = open_store(root, &config)?;
                print_json(&store.load())
            }
        },
    }
}

fn open_store(root: &Path, config: &AppConfig) -> Result<PreferenceStore<SqliteBackend>> {
    let path = root.join(STATE_FILE);
    let backend = SqliteBackend::open(&path)
        .with_context(|| format!("failed to open preference store {}", path.display()))?;
    Ok(PreferenceStore::with_config(backend, config.store))
}

fn resolve_entry(args: &PreferenceAddArgs) -> Result<(BlueprintRecord, String)> {
    let blueprint = select_blueprint(&args.blueprint)?;
    let address = args
        .address
        .clone()
        .unwrap_or_else(|| blueprint.address.clone());
    Ok((blueprint, address))
}

fn run_search(config: &AppConfig, args: &SearchArgs) -> Result<()> {
    let index = SearchIndex::new(load_addresses(&args.addresses)?);
    let limit = args.limit.unwrap_or(config.search.max_results);
    let page = index.page(&args.query, limit);
    print_json(&serde_json::json!({
        "query": args.query,
        "page": page,
        "remaining_label": page.remaining_label(),
        "empty_match": page.is_empty_match(),
    }))
}

fn run_map(config: &AppConfig, args: &MapArgs) -> Result<()> {
    let addresses = load_addresses(&args.addresses)?;
    let bounds = GeoBounds::new(args.south, args.west, args.north, args.east);
    let markers = visible_addresses_with(&config.map, bounds, &addresses);
    print_json(&serde_json::json!({
        "bounds": bounds,
        "markers": markers,
    }))
}

/// Records the scroll request instead of moving a real container.
#[derive(Debug, Default)]
struct RecordedScroll(Option<ScrollOffset>);

impl ScrollSurface for RecordedScroll {
    fn scroll_to(&mut self, offset: ScrollOffset) {
        self.0 = Some(offset);
    }
}

fn run_zoom(args: &ZoomArgs) -> Result<()> {
    let blueprint = select_blueprint(&args.blueprint)?;
    let [image_left, image_top, image_width, image_height] = args.image;
    let [container_left, container_top, container_width, container_height] = args.container;
    let click = ZoomClick {
        pointer: Point::new(args.pointer_x, args.pointer_y),
        image: Rect::new(image_left, image_top, image_width, image_height),
        container: Rect::new(container_left, container_top, container_width, container_height),
    };

    let mut viewer = ImageViewer::for_blueprint(&blueprint);
    let mut surface = RecordedScroll::default();
    let state = viewer.toggle(&click, &mut surface);
    print_json(&serde_json::json!({
        "hash": blueprint.content_hash,
        "zoom": state,
        "scrolled": surface.0,
    }))
}
