//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate validation rules and redirect behavior from page
//! and component logic to improve reuse and testability.

pub mod auth;
pub mod validate;
