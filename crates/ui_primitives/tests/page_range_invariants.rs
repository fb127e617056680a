use pretty_assertions::assert_eq;
use ui_primitives::{visible_pages, PageMarker};

const MAX_TOTAL: u32 = 24;
const MAX_SIBLINGS: u32 = 4;

fn windowed_cases() -> impl Iterator<Item = (u32, u32, u32, bool)> {
    (1..=MAX_TOTAL).flat_map(|total| {
        (1..=total).flat_map(move |current| {
            (0..=MAX_SIBLINGS).flat_map(move |siblings| {
                [true, false]
                    .into_iter()
                    .map(move |show_first_last| (current, total, siblings, show_first_last))
            })
        })
    })
}

fn shown_pages(markers: &[PageMarker]) -> Vec<u32> {
    markers.iter().filter_map(|marker| marker.page()).collect()
}

#[test]
fn all_pages_mode_never_elides() {
    for total in 0..=MAX_TOTAL {
        for current in 0..=total + 1 {
            let markers = visible_pages(current, total, None, true);
            assert_eq!(shown_pages(&markers), (1..=total).collect::<Vec<_>>());
            assert!(markers.iter().all(|marker| !marker.is_ellipsis()));
        }
    }
}

#[test]
fn pages_are_in_range_and_strictly_increasing() {
    for (current, total, siblings, show_first_last) in windowed_cases() {
        let pages = shown_pages(&visible_pages(current, total, Some(siblings), show_first_last));
        assert!(!pages.is_empty());
        assert!(pages.iter().all(|page| (1..=total).contains(page)));
        assert!(
            pages.windows(2).all(|pair| pair[0] < pair[1]),
            "{current}/{total} siblings={siblings}: {pages:?}"
        );
    }
}

#[test]
fn ellipsis_only_sits_between_pages_two_or_more_apart() {
    for (current, total, siblings, show_first_last) in windowed_cases() {
        let markers = visible_pages(current, total, Some(siblings), show_first_last);
        assert!(markers.first().is_some_and(|marker| !marker.is_ellipsis()));
        assert!(markers.last().is_some_and(|marker| !marker.is_ellipsis()));

        for window in markers.windows(3) {
            assert!(!(window[0].is_ellipsis() && window[1].is_ellipsis()));
            if let [PageMarker::Page(before), PageMarker::Ellipsis, PageMarker::Page(after)] = window
            {
                assert!(
                    after - before >= 2,
                    "{current}/{total} siblings={siblings}: {markers:?}"
                );
            }
        }

        for pair in markers.windows(2) {
            if let [PageMarker::Page(before), PageMarker::Page(after)] = pair {
                assert_eq!(after - before, 1, "{current}/{total}: {markers:?}");
            }
        }
    }
}

#[test]
fn first_and_last_are_pinned_when_enabled() {
    for (current, total, siblings, show_first_last) in windowed_cases() {
        let pages = shown_pages(&visible_pages(current, total, Some(siblings), show_first_last));
        if show_first_last {
            assert_eq!(pages.first(), Some(&1));
            assert_eq!(pages.last(), Some(&total));
        } else {
            let start = current.saturating_sub(siblings).max(1);
            let end = (current + siblings).min(total);
            assert_eq!(pages, (start..=end).collect::<Vec<_>>());
        }
    }
}

#[test]
fn window_always_contains_current_and_siblings() {
    for (current, total, siblings, show_first_last) in windowed_cases() {
        let pages = shown_pages(&visible_pages(current, total, Some(siblings), show_first_last));
        let start = current.saturating_sub(siblings).max(1);
        let end = (current + siblings).min(total);
        assert!((start..=end).all(|page| pages.contains(&page)));
    }
}

#[test]
fn repeated_calls_are_identical() {
    for (current, total, siblings, show_first_last) in windowed_cases() {
        assert_eq!(
            visible_pages(current, total, Some(siblings), show_first_last),
            visible_pages(current, total, Some(siblings), show_first_last)
        );
    }
}
