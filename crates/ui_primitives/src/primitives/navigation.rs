use super::*;

#[component]
/// Shared pagination primitive.
///
/// Each [`PageMarker::Page`] renders as a page button and each
/// [`PageMarker::Ellipsis`] as an inert gap indicator. The marker sequence is
/// re-derived whenever `current`, `total`, `siblings` or `show_first_last`
/// change. Activations are validated with [`resolve_page_change`] before
/// `on_page_change` runs, so the callback only ever sees a page other than the
/// current one within `1..=total`.
pub fn Pagination(
    #[prop(into)] current: MaybeSignal<u32>,
    #[prop(into)] total: MaybeSignal<u32>,
    #[prop(optional, into)] siblings: MaybeSignal<Option<u32>>,
    #[prop(default = MaybeSignal::Static(true), into)] show_first_last: MaybeSignal<bool>,
    #[prop(default = true)] show_prev_next: bool,
    #[prop(default = PaginationSize::Md)] size: PaginationSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = "Pagination".to_string(), into)] aria_label: String,
    #[prop(optional)] on_page_change: Option<Callback<u32>>,
) -> impl IntoView {
    let request_page = move |target: u32| {
        match resolve_page_change(current.get_untracked(), total.get_untracked(), target) {
            Ok(page) => {
                if let Some(on_page_change) = on_page_change.as_ref() {
                    on_page_change.call(page);
                }
            }
            Err(err) => logging::warn!("pagination request dropped: {err}"),
        }
    };

    let markers = move || {
        visible_pages(
            current.get(),
            total.get(),
            siblings.get(),
            show_first_last.get(),
        )
    };

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-size=size.token()
            data-ui-state=move || if total.get() == 0 { "empty" } else { "ready" }
            aria-label=aria_label
        >
            {show_prev_next.then(|| view! {
                <button
                    type="button"
                    data-ui-slot="previous"
                    data-ui-size=size.token()
                    aria-label="Previous page"
                    disabled=move || previous_page(current.get(), total.get()).is_none()
                    on:click=move |_| {
                        if let Some(page) = previous_page(current.get_untracked(), total.get_untracked()) {
                            request_page(page);
                        }
                    }
                >
                    "Previous"
                </button>
            })}
            <ol data-ui-slot="pages">
                {move || {
                    markers()
                        .into_iter()
                        .map(move |marker| match marker {
                            PageMarker::Page(page) => view! {
                                <li data-ui-slot="item">
                                    <button
                                        type="button"
                                        data-ui-slot="page"
                                        data-ui-size=size.token()
                                        data-ui-selected=move || bool_token(current.get() == page)
                                        aria-current=move || (current.get() == page).then_some("page")
                                        aria-label=format!("Page {page}")
                                        on:click=move |_| request_page(page)
                                    >
                                        {page}
                                    </button>
                                </li>
                            }
                            .into_view(),
                            PageMarker::Ellipsis => view! {
                                <li data-ui-slot="item">
                                    <span data-ui-slot="ellipsis" aria-hidden="true">"…"</span>
                                </li>
                            }
                            .into_view(),
                        })
                        .collect_view()
                }}
            </ol>
            {show_prev_next.then(|| view! {
                <button
                    type="button"
                    data-ui-slot="next"
                    data-ui-size=size.token()
                    aria-label="Next page"
                    disabled=move || next_page(current.get(), total.get()).is_none()
                    on:click=move |_| {
                        if let Some(page) = next_page(current.get_untracked(), total.get_untracked()) {
                            request_page(page);
                        }
                    }
                >
                    "Next"
                </button>
            })}
        </nav>
    }
}
