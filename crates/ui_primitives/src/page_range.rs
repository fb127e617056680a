//! Page-range derivation for pagination controls.
//!
//! [`visible_pages`] turns the current page, the page count and the sibling
//! configuration into the ordered [`PageMarker`] sequence a pagination control
//! renders. The sequence is recomputed on every call; nothing is cached.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
/// One entry of a rendered page sequence.
pub enum PageMarker {
    /// A concrete 1-based page.
    Page(u32),
    /// Pages omitted between the neighbouring markers.
    Ellipsis,
}

impl PageMarker {
    /// Page number carried by the marker, if any.
    pub fn page(self) -> Option<u32> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    /// Whether the marker is a gap placeholder.
    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// Whether the marker points at `current`.
    pub fn is_current(self, current: u32) -> bool {
        self.page() == Some(current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window configuration for [`visible_pages`].
pub struct PageRangeOptions {
    /// Pages shown on each side of the current page. `None` shows every page.
    pub siblings: Option<u32>,
    /// Pin the first and last page outside the sibling window.
    pub show_first_last: bool,
}

impl Default for PageRangeOptions {
    fn default() -> Self {
        Self {
            siblings: None,
            show_first_last: true,
        }
    }
}

impl PageRangeOptions {
    /// Windowed options with `siblings` pages on each side.
    pub fn windowed(siblings: u32) -> Self {
        Self {
            siblings: Some(siblings),
            ..Self::default()
        }
    }

    /// Returns a copy with first/last pinning set to `show_first_last`.
    pub fn with_first_last(self, show_first_last: bool) -> Self {
        Self {
            show_first_last,
            ..self
        }
    }

    /// Computes the marker sequence for `current` of `total` with these options.
    pub fn visible_pages(self, current: u32, total: u32) -> Vec<PageMarker> {
        visible_pages(current, total, self.siblings, self.show_first_last)
    }
}

/// Computes the ordered page markers for a pagination control.
///
/// Without `siblings` every page from `1` to `total` is listed and no ellipsis is
/// ever produced. With `siblings`, the window `current - siblings ..= current + siblings`
/// is listed; `show_first_last` pins page `1` and `total` around it. A pinned page
/// directly adjacent to the window is listed as is; any wider gap becomes a single
/// [`PageMarker::Ellipsis`].
///
/// A `total` of zero yields an empty sequence. The window bounds are clamped into
/// `1..=total`, so an out-of-range `current` still yields pages within range.
pub fn visible_pages(
    current: u32,
    total: u32,
    siblings: Option<u32>,
    show_first_last: bool,
) -> Vec<PageMarker> {
    let Some(siblings) = siblings else {
        return (1..=total).map(PageMarker::Page).collect();
    };

    if total <= 1 {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let end = current.saturating_add(siblings).min(total).max(1);
    let start = current.saturating_sub(siblings).max(1).min(end);

    let mut markers = Vec::with_capacity((end - start) as usize + 5);

    if show_first_last && start > 1 {
        markers.push(PageMarker::Page(1));
        if start > 2 {
            markers.push(PageMarker::Ellipsis);
        }
    }

    markers.extend((start..=end).map(PageMarker::Page));

    if show_first_last && end < total {
        if end < total - 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(total));
    }

    markers
}

/// Number of pages needed for `total_items` at `per_page` items each.
pub fn total_pages(total_items: usize, per_page: usize) -> u32 {
    if total_items == 0 || per_page == 0 {
        return 0;
    }
    u32::try_from(total_items.div_ceil(per_page)).unwrap_or(u32::MAX)
}

/// Page before `current`, or `None` on the first page.
pub fn previous_page(current: u32, total: u32) -> Option<u32> {
    if total == 0 {
        return None;
    }
    let current = current.clamp(1, total);
    (current > 1).then(|| current - 1)
}

/// Page after `current`, or `None` on the last page.
pub fn next_page(current: u32, total: u32) -> Option<u32> {
    if total == 0 {
        return None;
    }
    let current = current.clamp(1, total);
    (current < total).then(|| current + 1)
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Rejected page-change requests.
pub enum PageChangeError {
    /// The requested page is outside `1..=total`.
    #[error("page {target} is outside 1..={total}")]
    OutOfRange {
        /// Requested page.
        target: u32,
        /// Page count at request time.
        total: u32,
    },
    /// The requested page is already active.
    #[error("page {page} is already current")]
    Unchanged {
        /// Current page.
        page: u32,
    },
}

/// Validates a request to move from `current` to `target`.
///
/// # Errors
///
/// Returns [`PageChangeError::OutOfRange`] when `target` is not within `1..=total`
/// and [`PageChangeError::Unchanged`] when `target` equals `current`.
pub fn resolve_page_change(current: u32, total: u32, target: u32) -> Result<u32, PageChangeError> {
    if target == 0 || target > total {
        return Err(PageChangeError::OutOfRange { target, total });
    }
    if target == current {
        return Err(PageChangeError::Unchanged { page: target });
    }
    Ok(target)
}
