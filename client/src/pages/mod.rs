//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its section layout and delegates repeated blocks to
//! `components`.

pub mod home;
