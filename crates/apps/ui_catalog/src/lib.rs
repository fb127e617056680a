//! Component-story catalog for the shared pagination primitive.
//!
//! Every story in [`PAGINATION_STORIES`] renders a live [`Pagination`] bound to
//! its own page state, next to the marker sequence it currently derives, so
//! the range behavior can be reviewed without an app-local harness.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod state;
mod stories;

use leptos::*;
use serde_json::Value;
use ui_primitives::prelude::*;

pub use state::UiCatalogState;
pub use stories::{describe_markers, find_story, PaginationStory, PAGINATION_STORIES};

#[component]
/// Catalog root listing every pagination story.
pub fn UiCatalogApp(
    /// Previously persisted catalog state.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives a state snapshot whenever it changes.
    #[prop(optional)]
    on_persist: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(UiCatalogState::restore(restored_state));
    let last_saved = create_rw_signal::<Option<String>>(serde_json::to_string(&state.get_untracked()).ok());

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui catalog serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_persist) = on_persist.as_ref() {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_persist.call(value),
                Err(err) => logging::warn!("ui catalog snapshot failed: {err}"),
            }
        }
    });

    view! {
        <main class="ui-catalog" data-ui-kind="catalog">
            <header data-ui-slot="header">
                <h1>"Pagination"</h1>
                <p>"Page windows, pinned first and last pages, and ellipsis gaps."</p>
            </header>
            {PAGINATION_STORIES
                .iter()
                .map(|story| view! { <StoryPanel story state /> })
                .collect_view()}
            <footer data-ui-slot="status">
                {move || {
                    let snapshot = state.get();
                    match find_story(&snapshot.selected_story) {
                        Some(story) => format!(
                            "{}: page {} of {}",
                            story.title,
                            snapshot.page_for(story),
                            story.total
                        ),
                        None => String::new(),
                    }
                }}
            </footer>
        </main>
    }
}

#[component]
fn StoryPanel(story: &'static PaginationStory, state: RwSignal<UiCatalogState>) -> impl IntoView {
    let current = Signal::derive(move || state.with(|state| state.page_for(story)));

    view! {
        <section
            class="ui-catalog-story"
            data-ui-kind="story"
            data-ui-story=story.id
            data-ui-selected=move || state.with(|state| state.is_selected(story)).to_string()
        >
            <h2>{story.title}</h2>
            <p data-ui-slot="description">{story.description}</p>
            <Pagination
                current
                total=story.total
                siblings=story.options.siblings
                show_first_last=story.options.show_first_last
                aria_label=format!("{} pagination", story.title)
                on_page_change=Callback::new(move |page| {
                    state.update(|state| state.set_page(story, page));
                })
            />
            <code data-ui-slot="markers">
                {move || describe_markers(&story.markers(current.get()))}
            </code>
        </section>
    }
}

/// Mounts the catalog into the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    leptos::mount_to_body(|| view! { <UiCatalogApp /> })
}
