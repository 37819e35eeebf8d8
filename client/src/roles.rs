//! Role registry for the landing page.
//!
//! DESIGN
//! ======
//! The set of roles is closed. `Role::descriptor` is an exhaustive match over
//! static records, so every role that can be rendered has an entry by
//! construction and lookup cannot fail.

#[cfg(test)]
#[path = "roles_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::components::icon::Icon;

/// A user role offered on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Parent,
    Teacher,
}

/// Display and navigation metadata for one role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoleDescriptor {
    pub id: Role,
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    /// Classes for the "Enter Portal" button.
    pub color: &'static str,
    pub hover_ring: &'static str,
    pub border_color: &'static str,
    pub icon_color: &'static str,
    pub route: &'static str,
}

const STUDENT: RoleDescriptor = RoleDescriptor {
    id: Role::Student,
    name: "Student",
    icon: Icon::GraduationCap,
    description: "Access grades, schedules, assignments, and school announcements.",
    color: "bg-sky-600 hover:bg-sky-700",
    hover_ring: "ring-sky-500/50",
    border_color: "border-sky-500",
    icon_color: "text-sky-500",
    route: "/student",
};

const PARENT: RoleDescriptor = RoleDescriptor {
    id: Role::Parent,
    name: "Parent",
    icon: Icon::Users,
    description: "Monitor your child\u{2019}s progress, attendance, and communicate with staff.",
    color: "bg-emerald-600 hover:bg-emerald-700",
    hover_ring: "ring-emerald-500/50",
    border_color: "border-emerald-500",
    icon_color: "text-emerald-500",
    route: "/parent",
};

const TEACHER: RoleDescriptor = RoleDescriptor {
    id: Role::Teacher,
    name: "Teacher",
    icon: Icon::BookOpen,
    description: "Manage courses, submit grades, and plan lessons efficiently.",
    color: "bg-violet-600 hover:bg-violet-700",
    hover_ring: "ring-violet-500/50",
    border_color: "border-violet-500",
    icon_color: "text-violet-500",
    route: "/teacher",
};

impl Role {
    /// Every role, in the order the cards are rendered.
    pub const ALL: [Role; 3] = [Role::Student, Role::Parent, Role::Teacher];

    #[must_use]
    pub const fn descriptor(self) -> &'static RoleDescriptor {
        match self {
            Role::Student => &STUDENT,
            Role::Parent => &PARENT,
            Role::Teacher => &TEACHER,
        }
    }

    /// Lowercase identifier, as used in routes and JSON.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

/// Descriptors for every role, in render order.
pub fn registry() -> impl Iterator<Item = &'static RoleDescriptor> {
    Role::ALL.into_iter().map(Role::descriptor)
}
