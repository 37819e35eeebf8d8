//! Fixed entries for the "Key Features" grid.

use serde::Serialize;

use crate::components::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    pub title: &'static str,
    pub icon: Icon,
    pub icon_color: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [FeatureDescriptor; 3] = [
    FeatureDescriptor {
        title: "Unified Access",
        icon: Icon::User,
        icon_color: "text-violet-600",
        body: "One place for all stakeholders\u{2014}students, parents, and teachers\u{2014}to find relevant information.",
    },
    FeatureDescriptor {
        title: "Real-time Data",
        icon: Icon::BookOpen,
        icon_color: "text-emerald-600",
        body: "Instant updates on grades, attendance, and assignment status for timely intervention.",
    },
    FeatureDescriptor {
        title: "Secure & Reliable",
        icon: Icon::Users,
        icon_color: "text-sky-600",
        body: "Enterprise-grade security to protect sensitive student and academic records.",
    },
];
