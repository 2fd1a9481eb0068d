//! # Reforma Prelude
//!
//! Commonly used types in one import.
//!
//! ```
//! use reforma::prelude::*;
//!
//! let catalog = FurnitureCatalog::standard();
//! let placement = resolve_placement("Nevera_2.0L_1.0A_45R", &catalog).unwrap();
//! assert_eq!(placement.rotation_degrees, Some(-45.0));
//! ```

// Re-export core application types
pub use crate::app::ReformaApp;
pub use crate::config::AssemblyConfig;
pub use crate::error::{Result, SceneError};

// Re-export scene and resource types
pub use crate::gfx::resources::{AssetLibrary, AssetSource, Material};
pub use crate::gfx::scene::{Component, ComponentKind, NodeId, Prefab, PrefabNode, Scene};

// Re-export layout and assembly
pub use crate::assembly::{AssemblyReport, FloorAssembler, ModelSwitch, NodeRole, PlayerRig};
pub use crate::layout::{resolve_placement, Footprint, FurnitureCatalog, FurniturePlacer, Placement};
