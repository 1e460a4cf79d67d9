//! Pure core integration functions.
//!
//! Glue between the fetch shell and the state machine: completed fetches are
//! applied to [`AppState`], which may answer with follow-up effects (a restored
//! location whose tree just arrived needs its resources, a freshly listed
//! indexer needs its categories). Testable without threads or network.

use crate::fetch::FetchEvent;
use crate::state::{AppState, Effect};

/// Apply one completed fetch and return the effects it triggers.
pub fn apply_event(state: &mut AppState, event: FetchEvent) -> Vec<Effect> {
    match event {
        FetchEvent::IndexersLoaded(indexers) => state.indexers_loaded(indexers),
        FetchEvent::CategoriesLoaded { indexer, tree } => state.categories_loaded(indexer, tree),
        FetchEvent::ResourcesLoaded { generation, page } => {
            state.resources_loaded(generation, page);
            Vec::new()
        }
    }
}

/// Apply a batch of events in arrival order, collecting follow-up effects.
pub fn apply_events(state: &mut AppState, events: Vec<FetchEvent>) -> Vec<Effect> {
    events
        .into_iter()
        .flat_map(|event| apply_event(state, event))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{IndexerApi, ResourceRequest};
    use crate::fetch::run_effect;
    use crate::model::{
        ApiError, Category, CategoryId, IndexerId, Pagination, ResourceId, ResourcesPage,
    };

    // ===== Test Helpers =====

    struct CannedApi;

    impl IndexerApi for CannedApi {
        fn list_indexers(&self) -> Result<Vec<IndexerId>, ApiError> {
            Ok(vec![IndexerId::new("nyaa").unwrap(), IndexerId::new("dmhy").unwrap()])
        }

        fn list_categories(&self, indexer: &IndexerId) -> Result<Vec<Category>, ApiError> {
            let leaf = |id: &str| Category::new(CategoryId::new(id).unwrap(), id, vec![]);
            Ok(match indexer.as_str() {
                "nyaa" => vec![Category::new(
                    CategoryId::new("1").unwrap(),
                    "Anime",
                    vec![leaf("1_2"), leaf("1_3")],
                )],
                _ => vec![leaf("d")],
            })
        }

        fn list_resources(&self, request: &ResourceRequest) -> Result<ResourcesPage, ApiError> {
            Ok(ResourcesPage {
                pagination: Pagination {
                    page: request.page,
                    total_pages: 3,
                    page_size: request.page_size,
                    total: 300,
                },
                resources: Vec::new(),
            })
        }

        fn download(&self, _: &IndexerId, _: &ResourceId) -> Result<(), ApiError> {
            Ok(())
        }
    }

    /// Run effects synchronously until the state stops asking for more.
    fn settle(state: &mut AppState, mut effects: Vec<Effect>) {
        while let Some(effect) = effects.pop() {
            if let Some(event) = run_effect(&CannedApi, effect, 100) {
                effects.extend(apply_event(state, event));
            }
        }
    }

    #[test]
    fn start_up_settles_on_first_indexer() {
        let mut state = AppState::new("");
        let effects = state.start();

        settle(&mut state, effects);

        assert_eq!(state.facet().indexer().unwrap().as_str(), "nyaa");
        assert_eq!(state.facet().levels().len(), 1);
        assert_eq!(state.location(), "indexer=nyaa");
    }

    #[test]
    fn bookmarked_location_is_fully_restored() {
        let mut state = AppState::new("indexer=nyaa&category=1_3&page=2");
        let effects = state.start();

        settle(&mut state, effects);

        let ids: Vec<&str> = state.facet().path().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1_3"]);
        let page = state.resources_page().expect("resources loaded");
        assert_eq!(page.pagination.page, 2);
        assert_eq!(state.location(), "indexer=nyaa&category=1_3&page=2");
    }

    #[test]
    fn resources_event_applies_without_follow_up() {
        let mut state = AppState::new("");
        let effects = apply_event(
            &mut state,
            FetchEvent::ResourcesLoaded {
                generation: 42,
                page: None,
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn batch_applies_in_order() {
        let mut state = AppState::new("");
        state.start();
        let nyaa = IndexerId::new("nyaa").unwrap();

        let effects = apply_events(
            &mut state,
            vec![
                FetchEvent::IndexersLoaded(vec![nyaa.clone()]),
                FetchEvent::CategoriesLoaded {
                    indexer: nyaa.clone(),
                    tree: Some(Vec::new()),
                },
            ],
        );

        assert_eq!(effects, vec![Effect::LoadCategories(nyaa)]);
        assert!(state.facet().levels().is_empty());
    }
}
