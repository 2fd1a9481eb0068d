//! Components attachable to scene objects
//!
//! Components are plain data. Physics, interaction, and locomotion are the host
//! engine's business; the assembler only records what each node should carry.

use cgmath::Vector3;

use crate::gfx::resources::material::MaterialId;

/// How a grabbable object follows the hand that holds it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementType {
    Instantaneous,
    Kinematic,
    VelocityTracking,
}

/// How many interactors can select an interactable at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Single,
    Multiple,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    MeshRenderer {
        material: Option<MaterialId>,
    },
    MeshCollider,
    BoxCollider,
    CapsuleCollider {
        height: f32,
        center: Vector3<f32>,
    },
    HingeJoint {
        anchor: Vector3<f32>,
        axis: Vector3<f32>,
    },
    Rigidbody {
        linear_damping: f32,
    },
    GrabInteractable {
        movement: MovementType,
    },
    TeleportationArea {
        select_mode: SelectMode,
        interaction_layers: Vec<String>,
    },
}

/// Discriminant used to look components up without caring about their data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    MeshRenderer,
    MeshCollider,
    BoxCollider,
    CapsuleCollider,
    HingeJoint,
    Rigidbody,
    GrabInteractable,
    TeleportationArea,
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::MeshRenderer { .. } => ComponentKind::MeshRenderer,
            Component::MeshCollider => ComponentKind::MeshCollider,
            Component::BoxCollider => ComponentKind::BoxCollider,
            Component::CapsuleCollider { .. } => ComponentKind::CapsuleCollider,
            Component::HingeJoint { .. } => ComponentKind::HingeJoint,
            Component::Rigidbody { .. } => ComponentKind::Rigidbody,
            Component::GrabInteractable { .. } => ComponentKind::GrabInteractable,
            Component::TeleportationArea { .. } => ComponentKind::TeleportationArea,
        }
    }
}

impl ComponentKind {
    /// Freshly attached component of this kind with default settings
    pub fn default_component(self) -> Component {
        match self {
            ComponentKind::MeshRenderer => Component::MeshRenderer { material: None },
            ComponentKind::MeshCollider => Component::MeshCollider,
            ComponentKind::BoxCollider => Component::BoxCollider,
            ComponentKind::CapsuleCollider => Component::CapsuleCollider {
                height: 2.0,
                center: Vector3::new(0.0, 0.0, 0.0),
            },
            ComponentKind::HingeJoint => Component::HingeJoint {
                anchor: Vector3::new(0.0, 0.0, 0.0),
                axis: Vector3::new(1.0, 0.0, 0.0),
            },
            ComponentKind::Rigidbody => Component::Rigidbody {
                linear_damping: 0.0,
            },
            ComponentKind::GrabInteractable => Component::GrabInteractable {
                movement: MovementType::Instantaneous,
            },
            ComponentKind::TeleportationArea => Component::TeleportationArea {
                select_mode: SelectMode::Single,
                interaction_layers: Vec::new(),
            },
        }
    }
}
