//! # Graphics Module
//!
//! Scene graph and resources the assembler works on.
//!
//! - **Scene Management** ([`scene`]) - Object hierarchy, components, and prefabs
//! - **Resource Management** ([`resources`]) - Asset lookup and the material cache

pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use resources::{AssetLibrary, AssetSource, MaterialManager};
pub use scene::Scene;
