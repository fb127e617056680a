//! Shared navigation primitives built on the page-range derivation.

use leptos::*;

use crate::page_range::{next_page, previous_page, resolve_page_change, visible_pages, PageMarker};

mod navigation;

pub use navigation::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared pagination sizing tokens.
pub enum PaginationSize {
    /// Dense controls.
    Sm,
    /// Default controls.
    Md,
    /// Large controls.
    Lg,
}

impl Default for PaginationSize {
    fn default() -> Self {
        Self::Md
    }
}

impl PaginationSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-pagination", None), "ui-pagination");
        assert_eq!(merge_layout_class("ui-pagination", Some("")), "ui-pagination");
        assert_eq!(
            merge_layout_class("ui-pagination", Some("table-footer")),
            "ui-pagination table-footer"
        );
    }

    #[test]
    fn size_tokens_match_dom_contract() {
        assert_eq!(PaginationSize::default().token(), "md");
        assert_eq!(PaginationSize::Sm.token(), "sm");
        assert_eq!(PaginationSize::Lg.token(), "lg");
        assert_eq!(bool_token(true), "true");
    }
}
