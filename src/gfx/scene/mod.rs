//! # Scene Management Module
//!
//! Engine-agnostic scene graph the floor assembler operates on. It models just
//! enough of a host engine to express the assembly: a node hierarchy with
//! transforms and activation, data-only components, and prefab templates.
//!
//! ## Key Components
//!
//! - [`Scene`] - Arena of objects plus the material cache
//! - [`Object`] - A node with name, transform, activation flag, and components
//! - [`Prefab`] / [`PrefabNode`] - Templates deep-copied by [`Scene::instantiate`]
//! - [`Component`] - Colliders, joints, interaction and teleportation markers
//!
//! ## Usage
//!
//! ```
//! use cgmath::Vector3;
//! use reforma::gfx::scene::{Prefab, PrefabNode, Scene};
//!
//! let mut scene = Scene::new();
//! let room = scene.add_object("Kitchen", None);
//! let fridge = Prefab::new(PrefabNode::new("Nevera").with_renderer());
//! let id = scene.instantiate(
//!     &fridge,
//!     Vector3::new(1.0, 0.0, 2.0),
//!     Vector3::new(0.0, 0.0, 0.0),
//!     Some(room),
//! );
//! assert_eq!(scene.object(id).unwrap().name, "Nevera");
//! ```

pub mod components;
pub mod object;
pub mod prefab;
pub mod scene;
pub mod transform;

/// Index of an object inside its [`Scene`]
pub type NodeId = usize;

// Re-export main types
pub use components::{Component, ComponentKind, MovementType, SelectMode};
pub use object::Object;
pub use prefab::{Prefab, PrefabNode};
pub use scene::{Scene, SceneStatistics};
pub use transform::Transform;
