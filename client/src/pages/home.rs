//! Landing page: header, hero, role selection, features, footer.
//!
//! DESIGN
//! ======
//! Fully static. The role row and feature grid are driven by their registries
//! so the markup for each card is written once.

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::icon::{Icon, IconGlyph};
use crate::components::role_card::RoleCard;
use crate::features::FEATURES;
use crate::roles::Role;

pub const ADMIN_ROUTE: &str = "/admin";
pub const BRAND: &str = "SchoolSync";

const CONTAINER_CLASS: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 font-sans antialiased">
            <SiteHeader/>
            <main>
                <Hero/>
                <RoleSelection/>
                <Features/>
            </main>
            <SiteFooter/>
        </div>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    view! {
        <header class="py-4 shadow-md bg-white">
            <div class=format!("{CONTAINER_CLASS} flex justify-between items-center")>
                <div class="flex items-center space-x-2 text-2xl font-extrabold text-sky-600">
                    <IconGlyph icon=Icon::Home class="w-6 h-6"/>
                    <span>{BRAND}</span>
                </div>
                <a
                    href=ADMIN_ROUTE
                    class="px-4 py-2 text-sm font-medium text-white bg-sky-600 rounded-lg shadow-md hover:bg-sky-700 transition duration-150"
                >
                    "Admin Login"
                </a>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="bg-sky-50 py-16 md:py-24">
            <div class=format!("{CONTAINER_CLASS} text-center")>
                <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold tracking-tight text-gray-900">
                    "Your Complete "
                    <span class="text-sky-600">"School Management"</span>
                    " Solution"
                </h1>
                <p class="mt-4 max-w-2xl mx-auto text-xl text-gray-500">
                    "Connecting students, parents, and educators in one seamless digital ecosystem for better learning outcomes."
                </p>
                <div class="mt-8">
                    <span class="text-lg font-semibold text-gray-700">"Select your role to continue:"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RoleSelection() -> impl IntoView {
    view! {
        <section class="py-12 md:py-20 -mt-10" id="roles">
            <div class=CONTAINER_CLASS>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {Role::ALL.into_iter().map(|role| view! { <RoleCard role=role/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    let heading = format!("Key Features of {BRAND}");
    view! {
        <section class="bg-white py-12 md:py-20" id="features">
            <div class=CONTAINER_CLASS>
                <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">{heading}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let notice = format!("\u{a9} 2024 {BRAND}. All rights reserved. | Contact Support");
    view! {
        <footer class="bg-gray-800 py-8">
            <div class=format!("{CONTAINER_CLASS} text-center text-gray-400")>{notice}</div>
        </footer>
    }
}
