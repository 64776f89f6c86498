//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state wiring and delegates rendering details
//! to `components`.

pub mod analysis;
