//! Landing page feature card.

use leptos::prelude::*;

use crate::components::nav_link::NavLink;

/// A feature entry; `href: None` renders a disabled placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub href: Option<&'static str>,
}

impl Feature {
    pub fn is_active(&self) -> bool {
        self.href.is_some()
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    let body = move || {
        view! {
            <span class="feature-card__icon" aria-hidden="true">{feature.icon}</span>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        }
    };

    match feature.href {
        Some(href) => view! {
            <NavLink href=href class="feature-card feature-card--active">
                {body()}
            </NavLink>
        }
        .into_any(),
        None => view! {
            <div class="feature-card feature-card--disabled" aria-disabled="true">
                {body()}
                <span class="feature-card__badge">"Coming soon"</span>
            </div>
        }
        .into_any(),
    }
}
