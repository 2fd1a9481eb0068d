//! # Floor Assembly
//!
//! Walks the exported floor plan prefabs and turns named geometry into a
//! navigable scene: colliders and materials on architectural surfaces, hinged
//! grabbable doors, teleportable floors, ceiling lamps, and catalog furniture.
//!
//! Node roles come from name prefixes (see [`NamingConvention`](crate::config::NamingConvention)).

pub mod classify;
pub mod floor;
pub mod lights;
pub mod player;
pub mod switch;

pub use classify::{classify, NodeRole};
pub use floor::{AssemblyReport, FloorAssembler, SkippedNode};
pub use lights::place_light;
pub use player::{PlayerRig, Posture};
pub use switch::ModelSwitch;
