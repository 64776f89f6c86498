//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome from props and report user intent through
//! callbacks; the owning page decides how state changes.

pub mod sidebar;
