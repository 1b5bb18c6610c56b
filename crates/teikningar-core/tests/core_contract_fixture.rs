use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::{fs, path::PathBuf};

use serde_json::Value;
use teikningar_core::catalog::{
    find_blueprint, parse_address_list, parse_blueprint_list, sort_blueprints_newest_first,
};
use teikningar_core::models::{AddressRecord, BlueprintRecord};
use teikningar_core::store::STATE_KEY;
use teikningar_core::zoom::{Point, Rect, ScrollOffset, ScrollSurface, ZoomClick};
use teikningar_core::{
    GeoBounds, ImageViewer, MemoryBackend, PersistenceBackend, PreferenceStore, SearchIndex,
    ZoomState, normalize, search, visible_addresses,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap_or_else(|_| panic!("read fixture {name}"))
}

fn addresses() -> Vec<AddressRecord> {
    parse_address_list(&read_fixture("addresses.json")).expect("parse addresses fixture")
}

fn blueprints() -> Vec<BlueprintRecord> {
    parse_blueprint_list(&read_fixture("blueprints.json")).expect("parse blueprints fixture")
}

fn names(records: &[AddressRecord]) -> Vec<&str> {
    records.iter().map(AddressRecord::address).collect()
}

#[test]
fn fixture_addresses_are_normalized_locally() {
    let addresses = addresses();
    let thing = addresses
        .iter()
        .find(|record| record.address() == "Þingholtsstræti 5")
        .expect("fixture address");
    assert_eq!(thing.normalized_address(), normalize("Þingholtsstræti 5"));
    assert_eq!(thing.normalized_address(), "thingholtsstraeti 5");
}

#[test]
fn search_over_fixture_ranks_and_requires_all_tokens() {
    let addresses = addresses();
    assert!(search(&addresses, "").is_empty());
    assert_eq!(
        names(&search(&addresses, "lau")),
        vec!["Laufásvegur 7", "Laugavegur 1"]
    );
    assert_eq!(
        names(&search(&addresses, "skóla stíg")),
        vec!["Skólavörðustígur 3"]
    );
    assert_eq!(names(&search(&addresses, "ÆSU")), vec!["Æsufell 2"]);
}

#[test]
fn search_page_labels_counts_with_agreement() {
    let index = SearchIndex::new(addresses());
    let page = index.page("gata", 5);
    assert_eq!(page.total, 1);
    assert_eq!(page.shown[0].address, "Hverfisgata 112");
    assert_eq!(page.shown[0].count_label, "11 teikningar");
}

#[test]
fn map_viewport_over_fixture() {
    let addresses = addresses();
    let downtown = GeoBounds::new(64.140, -21.940, 64.150, -21.925);
    assert_eq!(
        names(&visible_addresses(downtown, &addresses)),
        vec![
            "Laugavegur 1",
            "Laufásvegur 7",
            "Skólavörðustígur 3",
            "Þingholtsstræti 5"
        ]
    );

    let whole_city = GeoBounds::new(64.08, -22.0, 64.18, -21.7);
    assert!(visible_addresses(whole_city, &addresses).is_empty());
}

#[test]
fn blueprint_listing_is_newest_first() {
    let mut blueprints = blueprints();
    sort_blueprints_newest_first(&mut blueprints);
    assert_eq!(blueprints[0].content_hash, "a93e77");
    assert!(find_blueprint(&blueprints, "5f1c0d").is_some());
}

#[derive(Default)]
struct Container {
    scrolled: Option<ScrollOffset>,
}

impl ScrollSurface for Container {
    fn scroll_to(&mut self, offset: ScrollOffset) {
        self.scrolled = Some(offset);
    }
}

#[test]
fn viewer_zooms_fixture_blueprint_from_top_left_corner() {
    let blueprints = blueprints();
    let blueprint = find_blueprint(&blueprints, "5f1c0d").expect("blueprint");
    let mut viewer = ImageViewer::for_blueprint(blueprint);
    let mut container = Container::default();

    let click = ZoomClick {
        pointer: Point::new(40.0, 120.0),
        image: Rect::new(40.0, 120.0, 600.0, 450.0),
        container: Rect::new(0.0, 100.0, 1024.0, 668.0),
    };
    let state = viewer.toggle(&click, &mut container);

    let origin = ScrollOffset { left: 0.0, top: 0.0 };
    assert_eq!(state, ZoomState::Zoomed { scroll: origin });
    assert_eq!(container.scrolled, Some(origin));
}

#[test]
fn untagged_state_fixture_migrates_and_round_trips_sketches() {
    let raw = read_fixture("persisted_state_untagged.json");
    let backend = MemoryBackend::new();
    backend.set(STATE_KEY, &raw).expect("seed");
    let store = PreferenceStore::new(backend.clone());

    let state = store.load();
    assert_eq!(state.recently_viewed.len(), 1);
    assert!(state.favorites.is_empty());

    let blueprints = blueprints();
    let newest = find_blueprint(&blueprints, "a93e77").expect("blueprint");
    store
        .add_favorite(newest, "Laugavegur 1")
        .expect("add favorite");

    let stored: Value =
        serde_json::from_str(&backend.get(STATE_KEY).expect("get").expect("blob")).expect("json");
    let original: Value = serde_json::from_str(&raw).expect("fixture json");
    assert_eq!(stored["version"], 1);
    assert_eq!(stored["sketches"], original["sketches"]);
    assert_eq!(stored["recentlyViewed"], original["recentlyViewed"]);
}

#[test]
fn favoriting_notifies_every_mounted_view() {
    let store = PreferenceStore::new(MemoryBackend::new());
    let blueprints = blueprints();
    let blueprint = &blueprints[0];

    let marker = Arc::new(Mutex::new(false));
    let marker_sink = Arc::clone(&marker);
    let key = blueprint.original_source_url.clone();
    let _marker_view = store
        .subscribe(move |state| {
            *marker_sink.lock().expect("marker") = state.contains_favorite(&key);
        })
        .expect("subscribe marker");

    let renders = Arc::new(AtomicUsize::new(0));
    let render_sink = Arc::clone(&renders);
    let _list_view = store
        .subscribe(move |_| {
            render_sink.fetch_add(1, Ordering::SeqCst);
        })
        .expect("subscribe list");

    store
        .add_favorite(blueprint, &blueprint.address)
        .expect("add favorite");
    assert!(*marker.lock().expect("marker"));

    store.remove_favorite(blueprint).expect("remove favorite");
    assert!(!*marker.lock().expect("marker"));
    assert_eq!(renders.load(Ordering::SeqCst), 2);
}
