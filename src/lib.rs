// src/lib.rs
//! Reforma
//!
//! Assembles VR-navigable floor plan scenes from exported geometry. Object names
//! carry the authoring intent: prefixes tag architectural roles, and furniture
//! placeholders encode type, footprint, and rotation
//! (`Nevera_2.0L_1.0A_90R`).

pub mod app;
pub mod assembly;
pub mod config;
pub mod error;
pub mod gfx;
pub mod layout;
pub mod prelude;

// Re-export main types for convenience
pub use app::ReformaApp;
pub use error::{Result, SceneError};
pub use layout::{resolve_placement, Placement};
