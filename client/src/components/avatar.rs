//! Profile avatar linking to the backend profile page.

use leptos::prelude::*;

use crate::components::nav_link::NavLink;
use crate::state::nav::PROFILE;
use crate::state::page::UserContext;

#[component]
pub fn ProfileAvatar(user: UserContext) -> impl IntoView {
    let src = user.avatar_src();
    let alt = user.display_name();

    view! {
        <NavLink href=PROFILE class="avatar" title="Profile">
            <img class="avatar__image" src=src alt=alt width="36" height="36"/>
        </NavLink>
    }
}
