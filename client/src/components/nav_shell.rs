//! Fixed page header shared by every view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages pick their contextual actions; logo, title link, logout, and avatar
//! are always present.

use leptos::prelude::*;

use crate::components::avatar::ProfileAvatar;
use crate::components::nav_link::NavLink;
use crate::state::nav::{HOME, LOGOUT, LinkMethod, NavAction};
use crate::state::page::PageContext;
use crate::util::assets::DA_LOGO;

fn action_class(action: NavAction) -> &'static str {
    if action.is_primary() { "btn btn--primary nav-shell__action" } else { "btn nav-shell__action" }
}

#[component]
pub fn NavShell(page: PageContext, actions: &'static [NavAction]) -> impl IntoView {
    let user = page.user().clone();
    let app_name = page.app_name.clone();

    view! {
        <header class="nav-shell">
            <div class="nav-shell__brand">
                <img class="nav-shell__logo" src=DA_LOGO alt="Logo" width="40" height="40"/>
                <NavLink href=HOME class="nav-shell__title">
                    {app_name}
                </NavLink>
            </div>

            <nav class="nav-shell__actions">
                {actions
                    .iter()
                    .map(|&action| {
                        view! {
                            <NavLink href=action.href() class=action_class(action)>
                                {action.label()}
                            </NavLink>
                        }
                    })
                    .collect_view()}
                <NavLink href=LOGOUT method=LinkMethod::Post class="btn nav-shell__logout">
                    "Logout"
                </NavLink>
                <ProfileAvatar user/>
            </nav>
        </header>
    }
}
