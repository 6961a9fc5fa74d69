pub mod composer;
pub mod engine;

pub use crate::domain::model::{BrowserEntry, CardView, PageConfig, RenderedPage};
pub use crate::domain::ports::{AssetProbe, Renderer, Storage};
pub use crate::utils::error::Result;
pub use composer::{compose_cards, compose_footer, compose_header, compose_page};
pub use engine::{FooterDate, PageEngine};
