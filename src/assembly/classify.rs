use crate::config::NamingConvention;

/// Architectural role of a node, derived from its name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Wall,
    Door,
    DoorFrame,
    Window,
    /// Wall pieces above and below a window opening
    WindowFrame,
    Floor,
    Ceiling,
    Light,
    /// No role prefix; may be a furniture placeholder
    Furniture,
}

/// Prefixes are tested in a fixed order and the first hit decides
pub fn classify(name: &str, naming: &NamingConvention) -> NodeRole {
    if name.starts_with(&naming.wall) {
        NodeRole::Wall
    } else if name.starts_with(&naming.door) {
        NodeRole::Door
    } else if name.starts_with(&naming.door_frame) {
        NodeRole::DoorFrame
    } else if name.starts_with(&naming.window) {
        NodeRole::Window
    } else if name.starts_with(&naming.window_top) || name.starts_with(&naming.window_base) {
        NodeRole::WindowFrame
    } else if name.starts_with(&naming.floor) {
        NodeRole::Floor
    } else if name.starts_with(&naming.ceiling) {
        NodeRole::Ceiling
    } else if name.starts_with(&naming.light) {
        NodeRole::Light
    } else {
        NodeRole::Furniture
    }
}
