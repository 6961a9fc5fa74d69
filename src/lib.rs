pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FsAssetProbe, HtmlRenderer, JsonRenderer};
pub use config::cli::LocalStorage;
pub use config::toml_config::{ConfigOverrides, PortalConfig};
pub use crate::core::{FooterDate, PageEngine};
pub use domain::model::{BrowserEntry, PageConfig, RenderedPage};
pub use utils::error::{PortalError, Result};
