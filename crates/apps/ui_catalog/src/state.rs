//! Persisted catalog state.

use std::collections::BTreeMap;

use leptos::logging;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::stories::{find_story, PaginationStory, PAGINATION_STORIES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Selected story and the page each story was left on.
pub struct UiCatalogState {
    /// Id of the highlighted story.
    pub selected_story: String,
    /// Current page per story id. Missing entries fall back to the story's initial page.
    #[serde(default)]
    pub pages: BTreeMap<String, u32>,
}

impl Default for UiCatalogState {
    fn default() -> Self {
        Self {
            selected_story: PAGINATION_STORIES
                .first()
                .map(|story| story.id.to_string())
                .unwrap_or_default(),
            pages: BTreeMap::new(),
        }
    }
}

impl UiCatalogState {
    /// Rebuilds state from a persisted snapshot, falling back to defaults.
    ///
    /// Unknown story ids are dropped so a stale snapshot cannot select a story
    /// that no longer exists.
    pub fn restore(snapshot: Option<Value>) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::default();
        };

        let mut state = match serde_json::from_value::<Self>(snapshot) {
            Ok(state) => state,
            Err(err) => {
                logging::warn!("ui catalog restore failed: {err}");
                return Self::default();
            }
        };

        state.pages.retain(|id, _| find_story(id).is_some());
        if find_story(&state.selected_story).is_none() {
            state.selected_story = Self::default().selected_story;
        }
        state
    }

    /// Page currently shown by `story`.
    pub fn page_for(&self, story: &PaginationStory) -> u32 {
        self.pages
            .get(story.id)
            .copied()
            .unwrap_or(story.initial_page)
    }

    /// Records `page` as current for `story` and selects it.
    pub fn set_page(&mut self, story: &PaginationStory, page: u32) {
        self.pages.insert(story.id.to_string(), page);
        self.selected_story = story.id.to_string();
    }

    /// Whether `story` is the highlighted one.
    pub fn is_selected(&self, story: &PaginationStory) -> bool {
        self.selected_story == story.id
    }
}
