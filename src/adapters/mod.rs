// Adapters layer: concrete implementations of the domain ports (asset probing, rendering).

pub mod assets;
pub mod render;

pub use assets::FsAssetProbe;
pub use render::{renderer_for, renderers_for, HtmlRenderer, JsonRenderer};
