//! Detail modal for a selected gallery item.

#[cfg(test)]
#[path = "gallery_modal_test.rs"]
mod gallery_modal_test;

use leptos::prelude::*;

use crate::components::gallery_card::color_class;
use crate::state::gallery::GalleryItem;

/// Whether a `KeyboardEvent.key` value dismisses the modal.
///
/// Legacy Edge reports Escape as `"Esc"`.
pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Closes on the close button, a backdrop click, or Escape.
///
/// The dialog takes focus when mounted; the click that opened it leaves
/// focus on the grid card, which would otherwise swallow Escape.
#[component]
pub fn GalleryModal(item: GalleryItem, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            if let Err(err) = dialog.focus() {
                log::warn!("gallery modal could not take focus: {err:?}");
            }
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop gallery-modal__backdrop" on:click=on_backdrop>
            <div
                class="dialog gallery-modal"
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="gallery-modal__header">
                    <h2>{item.title}</h2>
                    <button class="gallery-modal__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <div class=color_class(&item)>
                    <span class="gallery-modal__icon" aria-hidden="true">{item.icon}</span>
                </div>
                <p class="gallery-modal__description">{item.description}</p>
                <div class="gallery-modal__meta">
                    <span class="gallery-modal__category">{item.category}</span>
                    <span class="gallery-modal__year">{item.year}</span>
                </div>
            </div>
        </div>
    }
}
