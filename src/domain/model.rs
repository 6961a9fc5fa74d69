use serde::{Deserialize, Serialize};

/// Logo 顯示寬度 (px) 的預設值與允許範圍
pub const DEFAULT_LOGO_WIDTH_PX: u32 = 160;
pub const MIN_LOGO_WIDTH_PX: u32 = 160;
pub const MAX_LOGO_WIDTH_PX: u32 = 260;

pub const CARD_STATUS_LABEL: &str = "Live";

/// 一個外部 browser 的連結卡片設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserEntry {
    pub name: String,
    pub url: String,
    pub blurb: String,
}

impl BrowserEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>, blurb: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            blurb: blurb.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDescription {
    pub headline: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoConfig {
    pub path: String,
    pub width_px: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    pub include_timestamp: bool,
    pub timestamp_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub primary_light: String,
    pub text_muted: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#002F6C".to_string(),
            primary_light: "#E8EEF8".to_string(),
            text_muted: "rgba(0,0,0,0.65)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionsBlock {
    pub title: String,
    pub markdown: String,
}

/// 已驗證、不可變的頁面設定。只能透過 `config::toml_config` 建立。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub(crate) title: String,
    pub(crate) description: HeaderDescription,
    pub(crate) contact_name: String,
    pub(crate) contact_email: String,
    pub(crate) logo: Option<LogoConfig>,
    pub(crate) entries: Vec<BrowserEntry>,
    pub(crate) instructions: InstructionsBlock,
    pub(crate) footer: FooterConfig,
    pub(crate) theme: Theme,
}

impl PageConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &HeaderDescription {
        &self.description
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn logo(&self) -> Option<&LogoConfig> {
        self.logo.as_ref()
    }

    pub fn entries(&self) -> &[BrowserEntry] {
        &self.entries
    }

    pub fn instructions(&self) -> &InstructionsBlock {
        &self.instructions
    }

    pub fn footer(&self) -> &FooterConfig {
        &self.footer
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderLayout {
    TwoColumn,
    TitleOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoView {
    pub src: String,
    pub width_px: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub layout: HeaderLayout,
    pub logo: Option<LogoView>,
    pub title: String,
    pub description: HeaderDescription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAction {
    pub text: String,
    pub href: String,
    pub new_context: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub name: String,
    pub url: String,
    pub blurb: String,
    pub label: String,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub name: String,
    pub email: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterTimestamp {
    pub label: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterBlock {
    pub contact: ContactLink,
    pub timestamp: Option<FooterTimestamp>,
}

/// 交給呈現層的頁面描述樹
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPage {
    pub title: String,
    pub header: HeaderBlock,
    pub instructions: InstructionsBlock,
    pub cards: Vec<CardView>,
    pub footer: FooterBlock,
    pub theme: Theme,
}
