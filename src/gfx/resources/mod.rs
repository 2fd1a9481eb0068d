// src/gfx/resources/mod.rs
//! Resource management
//!
//! Asset lookup by resource path and the material cache built on top of it.

pub mod assets;
pub mod material;

// Re-export main types
pub use assets::{AssetLibrary, AssetSource};
pub use material::{Material, MaterialId, MaterialManager};
