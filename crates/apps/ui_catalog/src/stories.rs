//! Named pagination stories rendered by the catalog.

use ui_primitives::{PageMarker, PageRangeOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One pre-configured pagination example.
pub struct PaginationStory {
    /// Stable id used as the persisted state key.
    pub id: &'static str,
    /// Story heading.
    pub title: &'static str,
    /// Short explanation of the behavior on display.
    pub description: &'static str,
    /// Page selected when the story has no saved state.
    pub initial_page: u32,
    /// Page count.
    pub total: u32,
    /// Window configuration.
    pub options: PageRangeOptions,
}

impl PaginationStory {
    /// Marker sequence for `current` under this story's configuration.
    pub fn markers(&self, current: u32) -> Vec<PageMarker> {
        self.options.visible_pages(current, self.total)
    }
}

const fn windowed(siblings: u32, show_first_last: bool) -> PageRangeOptions {
    PageRangeOptions {
        siblings: Some(siblings),
        show_first_last,
    }
}

/// Every pagination story, in display order.
pub const PAGINATION_STORIES: &[PaginationStory] = &[
    PaginationStory {
        id: "all-pages",
        title: "All pages",
        description: "No sibling count: every page is listed and nothing is elided.",
        initial_page: 1,
        total: 10,
        options: PageRangeOptions {
            siblings: None,
            show_first_last: true,
        },
    },
    PaginationStory {
        id: "middle",
        title: "Middle of a long range",
        description: "One sibling each side, first and last pinned, gaps elided on both ends.",
        initial_page: 5,
        total: 20,
        options: windowed(1, true),
    },
    PaginationStory {
        id: "near-start",
        title: "Near the start",
        description: "The window touches page one, so only the trailing gap is elided.",
        initial_page: 2,
        total: 20,
        options: windowed(1, true),
    },
    PaginationStory {
        id: "short-range",
        title: "Short range",
        description: "The window plus pinned pages covers the whole range.",
        initial_page: 3,
        total: 5,
        options: windowed(1, true),
    },
    PaginationStory {
        id: "last-page",
        title: "Last page",
        description: "Two siblings on the final page; the leading gap is elided.",
        initial_page: 10,
        total: 10,
        options: windowed(2, true),
    },
    PaginationStory {
        id: "single-page",
        title: "Single page",
        description: "A one-page collection shows a single page marker.",
        initial_page: 1,
        total: 1,
        options: windowed(1, true),
    },
    PaginationStory {
        id: "window-only",
        title: "Window only",
        description: "First and last are not pinned; only the sibling window is shown.",
        initial_page: 5,
        total: 20,
        options: windowed(1, false),
    },
    PaginationStory {
        id: "zero-siblings",
        title: "Zero siblings",
        description: "Only the current page between the pinned first and last pages.",
        initial_page: 5,
        total: 9,
        options: windowed(0, true),
    },
    PaginationStory {
        id: "empty",
        title: "Empty collection",
        description: "Zero pages render no page markers and disable both directions.",
        initial_page: 1,
        total: 0,
        options: windowed(1, true),
    },
];

/// Looks up a story by id.
pub fn find_story(id: &str) -> Option<&'static PaginationStory> {
    PAGINATION_STORIES.iter().find(|story| story.id == id)
}

/// Compact text form of a marker sequence, e.g. `1 … 4 5 6 … 20`.
pub fn describe_markers(markers: &[PageMarker]) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(page) => page.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
