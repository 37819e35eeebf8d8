//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions of static descriptors; none of them read or
//! write reactive state.

pub mod feature_card;
pub mod icon;
pub mod role_card;
