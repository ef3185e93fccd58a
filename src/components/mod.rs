//! Reusable view components shared by pages.

pub mod session_badge;
