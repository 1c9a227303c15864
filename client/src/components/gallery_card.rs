//! Gallery grid tile.

use leptos::prelude::*;

use crate::state::gallery::GalleryItem;

/// CSS class for an item's color token.
pub fn color_class(item: &GalleryItem) -> String {
    format!("gallery-card__art gallery-card__art--{}", item.color_token)
}

#[component]
pub fn GalleryCard(item: GalleryItem, on_open: Callback<GalleryItem>) -> impl IntoView {
    view! {
        <button class="gallery-card" on:click=move |_| on_open.run(item) title=item.title>
            <div class=color_class(&item)>
                <span class="gallery-card__icon" aria-hidden="true">{item.icon}</span>
            </div>
            <div class="gallery-card__body">
                <span class="gallery-card__category">{item.category}</span>
                <h3 class="gallery-card__title">{item.title}</h3>
                <span class="gallery-card__year">{item.year}</span>
            </div>
        </button>
    }
}
