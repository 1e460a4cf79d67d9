//! Acceptance scenarios for pagination, category resolution and indexer switching.
//!
//! Drives the public state API the way the event loop does, with fetch
//! results applied by hand.

use idxview::fetch::FetchEvent;
use idxview::integration::apply_event;
use idxview::model::{find_path, Category, CategoryId, IndexerId, Pagination, ResourcesPage, SearchQuery};
use idxview::state::{window, AppState, Effect, FacetSelectionState, PageMarker, ResourceListController};

// ===== Helpers =====

fn cat(id: &str, name: &str, subs: Vec<Category>) -> Category {
    Category::new(CategoryId::new(id).unwrap(), name, subs)
}

fn indexer(name: &str) -> IndexerId {
    IndexerId::new(name).unwrap()
}

fn tree_x() -> Vec<Category> {
    vec![
        cat("a", "A", vec![cat("a1", "A1", vec![])]),
        cat("b", "B", vec![]),
    ]
}

fn tree_y() -> Vec<Category> {
    vec![cat("y1", "Y1", vec![]), cat("y2", "Y2", vec![])]
}

fn page_of(total_pages: u32, total: u32) -> ResourcesPage {
    ResourcesPage {
        pagination: Pagination {
            page: 1,
            total_pages,
            page_size: 100,
            total,
        },
        resources: Vec::new(),
    }
}

fn pages(markers: &[PageMarker]) -> Vec<String> {
    markers.iter().map(|m| m.label()).collect()
}

fn tickets(effects: &[Effect]) -> Vec<u64> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::FetchResources(ticket) => Some(ticket.generation),
            _ => None,
        })
        .collect()
}

// ===== Pagination window =====

#[test]
fn scenario_1_first_page_of_ten() {
    assert_eq!(pages(&window(1, 10, 5)), ["1", "2", "3", "4", "5", "»"]);
}

#[test]
fn scenario_2_last_page_of_ten() {
    assert_eq!(pages(&window(10, 10, 5)), ["«", "6", "7", "8", "9", "10"]);
}

#[test]
fn scenario_3_exact_fit_has_no_markers() {
    assert_eq!(
        window(5, 5, 5),
        (1..=5).map(PageMarker::Page).collect::<Vec<_>>()
    );
}

// ===== Category resolution =====

#[test]
fn scenario_4_find_path_returns_root_first_path() {
    let path = find_path(&tree_x(), &CategoryId::new("a1").unwrap()).unwrap();
    let names: Vec<&str> = path.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "A1"]);
}

#[test]
fn scenario_5_unknown_category_in_location_selects_nothing() {
    let mut state = AppState::new("?indexer=X&category=missing&page=2");
    let effects = state.start();
    assert!(effects.contains(&Effect::LoadCategories(indexer("X"))));

    apply_event(
        &mut state,
        FetchEvent::CategoriesLoaded {
            indexer: indexer("X"),
            tree: Some(tree_x()),
        },
    );

    assert!(state.facet().path().is_empty());
    assert_eq!(state.facet().levels(), &[tree_x()]);
    assert_eq!(state.facet().page(), 2);
    assert_eq!(state.pending_restore(), None);
}

#[test]
fn scenario_6_switching_indexer_clears_path() {
    let mut facet = FacetSelectionState::new();
    let x = tree_x();
    facet.set_indexer(indexer("X"), Some(x.as_slice()));
    facet.select_category_at_level(0, x[0].clone());
    assert_eq!(facet.path().len(), 1);

    let y = tree_y();
    facet.set_indexer(indexer("Y"), Some(y.as_slice()));

    assert!(facet.path().is_empty());
    assert_eq!(facet.levels(), &[y]);
}

// ===== Stale responses =====

#[test]
fn stale_resource_page_is_discarded() {
    let mut controller = ResourceListController::new();
    let a = SearchQuery::new(Some(indexer("X")), CategoryId::new("a").ok(), "", 1);
    let b = SearchQuery::new(Some(indexer("X")), CategoryId::new("b").ok(), "", 1);

    let ticket_a = controller.refresh(&a).unwrap();
    let ticket_b = controller.refresh(&b).unwrap();

    assert!(controller.complete(ticket_b.generation, Some(page_of(2, 150))));
    assert!(!controller.complete(ticket_a.generation, Some(page_of(9, 900))));

    assert_eq!(controller.page(), Some(&page_of(2, 150)));
    assert_eq!(controller.inputs(), Some(&b));
}

// ===== Full session =====

#[test]
fn browse_submit_page_and_go_back() {
    let mut state = AppState::new("");
    state.start();
    let effects = apply_event(&mut state, FetchEvent::IndexersLoaded(vec![indexer("X")]));
    assert_eq!(effects, vec![Effect::LoadCategories(indexer("X"))]);
    assert_eq!(state.location(), "indexer=X");

    apply_event(
        &mut state,
        FetchEvent::CategoriesLoaded {
            indexer: indexer("X"),
            tree: Some(tree_x()),
        },
    );

    // Browsing refreshes results but leaves the location alone.
    let effects = state.select_category(0, 1);
    let browse_gen = tickets(&effects);
    assert_eq!(browse_gen.len(), 1);
    assert_eq!(state.location(), "indexer=X");
    state.resources_loaded(browse_gen[0], Some(page_of(3, 250)));

    // Submitting commits the selection.
    state.submit();
    assert_eq!(state.location(), "indexer=X&category=b");

    let effects = state.go_to_page(3);
    assert_eq!(state.location(), "indexer=X&category=b&page=3");
    assert_eq!(tickets(&effects).len(), 1);

    state.history_back();
    assert_eq!(state.location(), "indexer=X&category=b");
    assert_eq!(state.facet().page(), 1);

    state.history_forward();
    assert_eq!(state.facet().page(), 3);
}

#[test]
fn out_of_range_page_is_ignored() {
    let mut state = AppState::new("indexer=X&category=b");
    state.start();
    apply_event(
        &mut state,
        FetchEvent::CategoriesLoaded {
            indexer: indexer("X"),
            tree: Some(tree_x()),
        },
    );
    let generation = state.resources().generation();
    state.resources_loaded(generation, Some(page_of(2, 150)));

    assert!(state.go_to_page(3).is_empty());
    assert!(state.go_to_page(0).is_empty());
    assert_eq!(state.facet().page(), 1);
    assert_eq!(state.location(), "indexer=X&category=b");
}
