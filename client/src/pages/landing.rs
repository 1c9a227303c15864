//! Landing page: hero greeting, feature cards, floating background icons.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::feature_card::{Feature, FeatureCard};
use crate::components::nav_shell::NavShell;
use crate::state::nav::{INCOMING_DVS, MAIN_ACTIONS};
use crate::state::page::{PageContext, UserContext};
use crate::util::assets::APP_LOGO;

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Incoming DVs",
        description: "Log, track, and route disbursement vouchers as they arrive.",
        icon: "📥",
        href: Some(INCOMING_DVS),
    },
    Feature {
        title: "Outgoing DVs",
        description: "Follow released vouchers through payment.",
        icon: "📤",
        href: None,
    },
    Feature {
        title: "Reports",
        description: "Turnaround and volume reports per division.",
        icon: "📊",
        href: None,
    },
    Feature {
        title: "Archive",
        description: "Search vouchers from previous fiscal years.",
        icon: "🗂️",
        href: None,
    },
];

/// Decorative glyph drifting behind the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingIcon {
    pub glyph: &'static str,
    /// Offset from the top edge, percent.
    pub top: f32,
    /// Offset from the left edge, percent.
    pub left: f32,
    /// Animation delay, seconds.
    pub delay: f32,
}

impl FloatingIcon {
    pub fn style(&self) -> String {
        format!("top: {}%; left: {}%; animation-delay: {}s", self.top, self.left, self.delay)
    }
}

pub const BACKGROUND_ICONS: &[FloatingIcon] = &[
    FloatingIcon { glyph: "📄", top: 8.0, left: 6.0, delay: 0.0 },
    FloatingIcon { glyph: "💰", top: 18.0, left: 84.0, delay: 1.5 },
    FloatingIcon { glyph: "📋", top: 62.0, left: 10.0, delay: 3.0 },
    FloatingIcon { glyph: "✅", top: 74.0, left: 78.0, delay: 0.75 },
    FloatingIcon { glyph: "📁", top: 40.0, left: 92.0, delay: 2.25 },
    FloatingIcon { glyph: "🖊️", top: 86.0, left: 40.0, delay: 4.0 },
];

pub fn hero_greeting(user: &UserContext) -> String {
    format!("Hello, {}!", user.greeting_name())
}

#[component]
pub fn LandingPage(page: PageContext) -> impl IntoView {
    let title = page.title("Welcome");
    let greeting = hero_greeting(page.user());
    let role = page.user().role_label().map(str::to_owned);

    view! {
        <Title text=title/>
        <div class="landing-page">
            <NavShell page actions=MAIN_ACTIONS/>

            <div class="landing-page__background" aria-hidden="true">
                {BACKGROUND_ICONS
                    .iter()
                    .map(|icon| {
                        view! {
                            <span class="landing-page__floating-icon" style=icon.style()>
                                {icon.glyph}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <main class="landing-page__content">
                <section class="landing-page__hero">
                    <img class="landing-page__app-logo" src=APP_LOGO alt="" width="96" height="96"/>
                    <h1 class="landing-page__greeting">{greeting}</h1>
                    {role.map(|role| view! { <span class="landing-page__role">{role}</span> })}
                    <p class="landing-page__tagline">
                        "Track every disbursement voucher from receipt to release."
                    </p>
                </section>

                <section class="landing-page__features">
                    {FEATURES
                        .iter()
                        .map(|&feature| view! { <FeatureCard feature/> })
                        .collect_view()}
                </section>
            </main>
        </div>
    }
}
