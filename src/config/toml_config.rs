use crate::domain::model::{
    BrowserEntry, FooterConfig, HeaderDescription, InstructionsBlock, LogoConfig, PageConfig,
    Theme, DEFAULT_LOGO_WIDTH_PX, MAX_LOGO_WIDTH_PX, MIN_LOGO_WIDTH_PX,
};
use crate::utils::error::{PortalError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// 內建的參考設定（原本的三個 kidney browser）
pub const REFERENCE_CONFIG: &str = include_str!("../../portal.toml");

const DEFAULT_TIMESTAMP_LABEL: &str = "Last modified";
const DEFAULT_INSTRUCTIONS_TITLE: &str = "How to use these browsers (quick guide)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub page: PageSection,
    pub contact: ContactSection,
    pub logo: Option<LogoSection>,
    pub footer: Option<FooterSection>,
    pub instructions: Option<InstructionsSection>,
    pub theme: Option<ThemeSection>,
    #[serde(default)]
    pub browsers: Vec<BrowserSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSection {
    pub title: String,
    pub headline: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSection {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoSection {
    pub path: String,
    pub width_px: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterSection {
    pub include_timestamp: Option<bool>,
    pub timestamp_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionsSection {
    pub title: Option<String>,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSection {
    pub primary: Option<String>,
    pub primary_light: Option<String>,
    pub text_muted: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSection {
    pub name: String,
    pub url: String,
    pub blurb: String,
}

/// 命令列或環境變數提供的覆蓋值
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub title: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub logo_path: Option<String>,
}

impl PortalConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortalError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortalError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn reference() -> Result<Self> {
        Self::from_toml_str(REFERENCE_CONFIG)
    }

    /// 替換環境變數 (例如 ${CONTACT_EMAIL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(title) = &overrides.title {
            tracing::info!("🔧 Title overridden to: {}", title);
            self.page.title = title.clone();
        }
        if let Some(name) = &overrides.contact_name {
            self.contact.name = name.clone();
        }
        if let Some(email) = &overrides.contact_email {
            self.contact.email = email.clone();
        }
        if let Some(path) = &overrides.logo_path {
            tracing::info!("🔧 Logo path overridden to: {}", path);
            match &mut self.logo {
                Some(logo) => logo.path = path.clone(),
                None => {
                    self.logo = Some(LogoSection {
                        path: path.clone(),
                        width_px: None,
                    })
                }
            }
        }
    }

    /// 驗證並轉為不可變的 PageConfig
    pub fn to_page_config(&self) -> Result<PageConfig> {
        validation::validate_non_empty_string("page.title", &self.page.title)?;
        validation::validate_non_empty_string("page.headline", &self.page.headline)?;
        validation::validate_non_empty_string("contact.name", &self.contact.name)?;
        validation::validate_email("contact.email", &self.contact.email)?;

        let logo = match &self.logo {
            Some(section) => {
                validation::validate_path("logo.path", &section.path)?;
                let width_px = section.width_px.unwrap_or(DEFAULT_LOGO_WIDTH_PX);
                validation::validate_range(
                    "logo.width_px",
                    width_px,
                    MIN_LOGO_WIDTH_PX,
                    MAX_LOGO_WIDTH_PX,
                )?;
                Some(LogoConfig {
                    path: section.path.clone(),
                    width_px,
                })
            }
            None => None,
        };

        if self.browsers.is_empty() {
            return Err(PortalError::ConfigError {
                message: "at least one [[browsers]] entry is required".to_string(),
            });
        }

        let mut entries = Vec::with_capacity(self.browsers.len());
        for browser in &self.browsers {
            validation::validate_non_empty_string("browsers.name", &browser.name)?;
            validation::validate_url("browsers.url", &browser.url)?;
            entries.push(BrowserEntry::new(
                browser.name.clone(),
                browser.url.clone(),
                browser.blurb.clone(),
            ));
        }
        validation::validate_unique_names(
            "browsers.name",
            entries.iter().map(|entry| entry.name.as_str()),
        )?;

        let footer = FooterConfig {
            include_timestamp: self
                .footer
                .as_ref()
                .and_then(|f| f.include_timestamp)
                .unwrap_or(true),
            timestamp_label: self
                .footer
                .as_ref()
                .and_then(|f| f.timestamp_label.clone())
                .unwrap_or_else(|| DEFAULT_TIMESTAMP_LABEL.to_string()),
        };

        let instructions = match &self.instructions {
            Some(section) => InstructionsBlock {
                title: section
                    .title
                    .clone()
                    .unwrap_or_else(|| DEFAULT_INSTRUCTIONS_TITLE.to_string()),
                markdown: section.markdown.trim().to_string(),
            },
            None => InstructionsBlock {
                title: DEFAULT_INSTRUCTIONS_TITLE.to_string(),
                markdown: String::new(),
            },
        };

        Ok(PageConfig {
            title: self.page.title.clone(),
            description: HeaderDescription {
                headline: self.page.headline.clone(),
                detail: self.page.detail.clone().filter(|d| !d.trim().is_empty()),
            },
            contact_name: self.contact.name.clone(),
            contact_email: self.contact.email.clone(),
            logo,
            entries,
            instructions,
            footer,
            theme: self.theme()?,
        })
    }

    fn theme(&self) -> Result<Theme> {
        let mut theme = Theme::default();
        if let Some(section) = &self.theme {
            if let Some(primary) = &section.primary {
                validation::validate_hex_color("theme.primary", primary)?;
                theme.primary = primary.clone();
            }
            if let Some(light) = &section.primary_light {
                validation::validate_hex_color("theme.primary_light", light)?;
                theme.primary_light = light.clone();
            }
            if let Some(muted) = &section.text_muted {
                validation::validate_non_empty_string("theme.text_muted", muted)?;
                theme.text_muted = muted.clone();
            }
        }
        Ok(theme)
    }
}

impl Validate for PortalConfig {
    fn validate(&self) -> Result<()> {
        self.to_page_config().map(|_| ())
    }
}
