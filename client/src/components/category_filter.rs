//! Category filter pills for the gallery.

use leptos::prelude::*;

fn pill_class(active: bool) -> &'static str {
    if active { "category-filter__pill category-filter__pill--active" } else { "category-filter__pill" }
}

/// One pill per category; the active pill is `selected`.
#[component]
pub fn CategoryFilter(
    categories: Vec<&'static str>,
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter" role="tablist">
            {categories
                .into_iter()
                .map(|category| {
                    let is_active = move || selected.get() == category;
                    view! {
                        <button
                            class=move || pill_class(is_active())
                            role="tab"
                            aria-selected=move || if is_active() { "true" } else { "false" }
                            on:click=move |_| on_select.run(category.to_owned())
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
