//! Tile for one entry of the features grid.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::features::FeatureDescriptor;

#[component]
pub fn FeatureCard(feature: FeatureDescriptor) -> impl IntoView {
    view! {
        <div class="p-6 bg-gray-100 rounded-xl shadow-lg">
            <IconGlyph icon=feature.icon class=format!("w-8 h-8 mx-auto {} mb-4", feature.icon_color)/>
            <h3 class="text-xl font-semibold text-gray-800">{feature.title}</h3>
            <p class="mt-2 text-gray-600">{feature.body}</p>
        </div>
    }
}
