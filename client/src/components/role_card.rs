//! Selection card for one role on the landing page.
//!
//! DESIGN
//! ======
//! The whole card is a plain hyperlink to the role's route; navigation is left
//! to the browser. Every visual variation comes from the role's descriptor.

#[cfg(test)]
#[path = "role_card_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::roles::Role;

const CARD_BASE_CLASS: &str = "flex flex-col items-center p-6 bg-white rounded-xl shadow-lg \
     transition-all duration-300 transform hover:scale-[1.03] cursor-pointer \
     ring-2 ring-transparent hover:ring-8 border-t-4 h-full";

const ACTION_BASE_CLASS: &str = "mt-6 px-6 py-2 text-white font-semibold rounded-full shadow-md transition duration-300";

fn card_class(role: Role) -> String {
    let d = role.descriptor();
    format!("{CARD_BASE_CLASS} {} {}", d.hover_ring, d.border_color)
}

fn action_class(role: Role) -> String {
    format!("{ACTION_BASE_CLASS} {}", role.descriptor().color)
}

/// A clickable card linking to `role`'s portal.
#[component]
pub fn RoleCard(role: Role) -> impl IntoView {
    let d = role.descriptor();
    let heading = format!("{} Login", d.name);

    view! {
        <a href=d.route class=card_class(role) data-role=role.key()>
            <IconGlyph icon=d.icon class=format!("w-12 h-12 {}", d.icon_color)/>
            <h3 class="mt-4 text-xl font-bold text-gray-800">{heading}</h3>
            <p class="mt-2 text-center text-gray-600 text-sm">{d.description}</p>
            <span class=action_class(role) role="presentation">"Enter Portal"</span>
        </a>
    }
}
