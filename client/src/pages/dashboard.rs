//! Dashboard page with a greeting and static demo content.
//!
//! SYSTEM CONTEXT
//! ==============
//! The DV backend owns voucher data; the figures here are fixtures shown
//! until the dashboard is wired to it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::nav_shell::NavShell;
use crate::state::nav::MAIN_ACTIONS;
use crate::state::page::{PageContext, UserContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryTile {
    pub label: &'static str,
    pub value: u32,
    pub icon: &'static str,
}

pub const SUMMARY_TILES: &[SummaryTile] = &[
    SummaryTile { label: "Incoming", value: 24, icon: "📥" },
    SummaryTile { label: "Pending review", value: 7, icon: "⏳" },
    SummaryTile { label: "Released", value: 112, icon: "✅" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub dv_number: &'static str,
    pub payee: &'static str,
    pub status: &'static str,
}

pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity { dv_number: "DV-2024-0131", payee: "Office Supplies Co.", status: "Received" },
    Activity { dv_number: "DV-2024-0128", payee: "City Water District", status: "For review" },
    Activity { dv_number: "DV-2024-0122", payee: "Northside Printing", status: "Released" },
];

pub fn welcome_line(user: &UserContext) -> String {
    format!("Welcome back, {}!", user.greeting_name())
}

/// Modifier class for an activity status badge.
pub fn status_class(status: &str) -> String {
    let slug: String = status
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("status-badge status-badge--{slug}")
}

#[component]
pub fn DashboardPage(page: PageContext) -> impl IntoView {
    let title = page.title("Dashboard");
    let welcome = welcome_line(page.user());
    let role = page.user().role_label().map(str::to_owned);

    view! {
        <Title text=title/>
        <div class="dashboard-page">
            <NavShell page actions=MAIN_ACTIONS/>

            <main class="dashboard-page__content">
                <section class="dashboard-page__greeting">
                    <h1>{welcome}</h1>
                    {role.map(|role| view! { <span class="dashboard-page__role">{role}</span> })}
                    <p>"Here is where your disbursement vouchers stand today."</p>
                </section>

                <section class="dashboard-page__tiles">
                    {SUMMARY_TILES
                        .iter()
                        .map(|tile| {
                            view! {
                                <div class="summary-tile">
                                    <span class="summary-tile__icon" aria-hidden="true">{tile.icon}</span>
                                    <span class="summary-tile__value">{tile.value}</span>
                                    <span class="summary-tile__label">{tile.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="dashboard-page__activity">
                    <h2>"Recent activity"</h2>
                    <ul class="activity-list">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|entry| {
                                view! {
                                    <li class="activity-list__row">
                                        <span class="activity-list__dv">{entry.dv_number}</span>
                                        <span class="activity-list__payee">{entry.payee}</span>
                                        <span class=status_class(entry.status)>{entry.status}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </main>
        </div>
    }
}
