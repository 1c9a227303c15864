//! Gallery page: category filter, item grid, and detail modal.
//!
//! DESIGN
//! ======
//! A single `RwSignal<GalleryState>` holds the page state. Every interaction
//! is dispatched as a `GalleryEvent` through `GalleryState::reduce`; the grid
//! and modal are derived from the signal on each change.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::category_filter::CategoryFilter;
use crate::components::gallery_card::GalleryCard;
use crate::components::gallery_modal::GalleryModal;
use crate::components::nav_shell::NavShell;
use crate::state::gallery::{ALL_CATEGORY, GALLERY_ITEMS, GalleryEvent, GalleryItem, GalleryState, categories};
use crate::state::nav::GALLERY_ACTIONS;
use crate::state::page::PageContext;

/// Caption above the grid describing the current filter.
pub fn result_summary(count: usize, category: &str) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    match (count, category) {
        (_, ALL_CATEGORY) => format!("Showing all {count} {noun}"),
        (0, _) => format!("No items in {category}"),
        _ => format!("{count} {noun} in {category}"),
    }
}

#[component]
pub fn GalleryPage(page: PageContext) -> impl IntoView {
    let title = page.title("Gallery");
    let state = RwSignal::new(GalleryState::default());

    let dispatch = Callback::new(move |event: GalleryEvent| {
        #[cfg(feature = "hydrate")]
        log::debug!("gallery event: {event:?}");
        state.update(|s| *s = std::mem::take(s).reduce(event));
    });
    let on_select = Callback::new(move |category: String| dispatch.run(GalleryEvent::SelectCategory(category)));
    let on_open = Callback::new(move |item: GalleryItem| dispatch.run(GalleryEvent::ClickItem(item)));
    let on_close = Callback::new(move |()| dispatch.run(GalleryEvent::Close));

    let selected = Signal::derive(move || state.with(|s| s.selected_category.clone()));
    let visible = move || state.with(|s| s.visible(GALLERY_ITEMS).copied().collect::<Vec<_>>());
    let summary = move || {
        state.with(|s| result_summary(s.visible(GALLERY_ITEMS).count(), &s.selected_category))
    };
    let open_item = move || state.with(|s| s.selection.item().copied());

    view! {
        <Title text=title/>
        <div class="gallery-page">
            <NavShell page actions=GALLERY_ACTIONS/>

            <main class="gallery-page__content">
                <section class="gallery-page__header">
                    <h1>"Gallery"</h1>
                    <p>"Moments from the people and places behind the vouchers."</p>
                </section>

                <CategoryFilter categories=categories(GALLERY_ITEMS) selected on_select/>

                <p class="gallery-page__summary">{summary}</p>

                <div class="gallery-page__grid">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|item| view! { <GalleryCard item on_open/> })
                            .collect_view()
                    }}
                </div>
            </main>

            {move || open_item().map(|item| view! { <GalleryModal item on_close/> })}
        </div>
    }
}
