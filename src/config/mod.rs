pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::ConfigOverrides;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "browser-portal")]
#[command(about = "Render a landing page that links to hosted data browsers")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "portal.toml", env = "PORTAL_CONFIG")]
    pub config: String,

    /// Directory the rendered page is written to
    #[arg(short, long, default_value = "./site", env = "PORTAL_OUTPUT")]
    pub output_path: String,

    /// Output formats (html, json)
    #[arg(long, value_delimiter = ',', default_value = "html")]
    pub format: Vec<String>,

    #[arg(long, env = "PORTAL_TITLE")]
    pub title: Option<String>,

    #[arg(long, env = "PORTAL_CONTACT_NAME")]
    pub contact_name: Option<String>,

    #[arg(long, env = "PORTAL_CONTACT_EMAIL")]
    pub contact_email: Option<String>,

    #[arg(long, env = "PORTAL_LOGO")]
    pub logo: Option<String>,

    /// Omit the footer date regardless of the configuration
    #[arg(long)]
    pub no_timestamp: bool,

    /// Show what would be rendered without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the built-in reference configuration and exit
    #[arg(long)]
    pub print_reference_config: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            title: self.title.clone(),
            contact_name: self.contact_name.clone(),
            contact_email: self.contact_email.clone(),
            logo_path: self.logo.clone(),
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_and_overrides() {
        let config = CliConfig::parse_from([
            "browser-portal",
            "--format",
            "html,json",
            "--title",
            "My Browsers",
        ]);

        assert_eq!(config.format, vec!["html", "json"]);
        assert!(!config.dry_run);

        let overrides = config.overrides();
        assert_eq!(overrides.title.as_deref(), Some("My Browsers"));
    }
}
