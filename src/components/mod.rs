//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form fields and reading cards while leaving state
//! ownership with the pages that use them.

pub mod entry_card;
pub mod password_field;
pub mod text_field;
