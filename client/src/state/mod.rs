//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data wrapped in `RwSignal` by the app root and
//! shared with pages through Leptos context.

pub mod ui;
