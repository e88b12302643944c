// Folio shared type definitions
// Each submodule defines types used across the application.

pub mod content;
pub mod errors;
pub mod layout;
pub mod section;
pub mod settings;
