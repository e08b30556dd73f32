mod component;
mod render;
mod state;
mod types;

pub use component::NetworkCanvas;
pub use types::{LayoutMode, NetworkData, NetworkLink, NetworkNode, NodeGroup};
