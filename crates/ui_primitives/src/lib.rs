//! Shared pagination primitives for web applications.
//!
//! The crate owns the page-range derivation used by pagination controls and a
//! Leptos [`Pagination`] primitive that renders it through the stable
//! `data-ui-*` DOM contract. The derivation in [`page_range`] is framework-free
//! and can be consumed directly by other renderers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod page_range;
mod primitives;

pub use page_range::{
    next_page, previous_page, resolve_page_change, total_pages, visible_pages, PageChangeError,
    PageMarker, PageRangeOptions,
};
pub use primitives::{Pagination, PaginationSize};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        next_page, previous_page, resolve_page_change, total_pages, visible_pages,
        PageChangeError, PageMarker, PageRangeOptions, Pagination, PaginationSize,
    };
}
