//! Error types for scene assembly
//!
//! Every failure during assembly is recoverable: the assembler logs it and skips
//! the affected node. These variants exist so lower layers can report *why*.

use thiserror::Error;

use crate::gfx::scene::NodeId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Prefab not found: {0}")]
    PrefabNotFound(String),

    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    #[error("No catalog entry matches '{0}'")]
    NoCatalogEntry(String),

    #[error("Catalog key for '{0}' is empty")]
    EmptyCatalogKey(String),

    #[error("Invalid footprint for '{key}': width={width}, depth={depth}")]
    InvalidFootprint { key: String, width: f32, depth: f32 },

    #[error("Node {0} does not exist")]
    NodeNotFound(NodeId),

    #[error("Base prefab path is not set")]
    EmptyPrefabPath,
}

pub type Result<T> = std::result::Result<T, SceneError>;
