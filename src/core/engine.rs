use crate::core::composer::{compose_page, logo_output_path};
use crate::domain::model::{PageConfig, RenderedPage};
use crate::domain::ports::{AssetProbe, Renderer, Storage};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// 頁尾日期的來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterDate {
    /// 呈現當下的本地日期
    #[default]
    Today,
    Fixed(NaiveDate),
    Omit,
}

impl FooterDate {
    fn resolve(self) -> Option<NaiveDate> {
        match self {
            FooterDate::Today => Some(chrono::Local::now().date_naive()),
            FooterDate::Fixed(date) => Some(date),
            FooterDate::Omit => None,
        }
    }
}

pub struct PageEngine<S: Storage, A: AssetProbe> {
    storage: S,
    probe: A,
    renderers: Vec<Box<dyn Renderer>>,
    footer_date: FooterDate,
}

impl<S: Storage, A: AssetProbe> PageEngine<S, A> {
    pub fn new(storage: S, probe: A, renderers: Vec<Box<dyn Renderer>>) -> Self {
        Self {
            storage,
            probe,
            renderers,
            footer_date: FooterDate::default(),
        }
    }

    pub fn with_footer_date(mut self, footer_date: FooterDate) -> Self {
        self.footer_date = footer_date;
        self
    }

    /// 只組合頁面，不寫出任何檔案
    pub fn preview(&self, config: &PageConfig) -> Result<RenderedPage> {
        let logo_exists = config
            .logo()
            .map(|logo| self.probe.exists(&logo.path))
            .unwrap_or(false);
        compose_page(config, logo_exists, self.footer_date.resolve())
    }

    /// 組合、呈現並寫出；回傳寫出的檔案路徑（相對於輸出目錄）
    pub async fn run(&self, config: &PageConfig) -> Result<Vec<String>> {
        tracing::info!("🧩 Composing page: {}", config.title());

        let logo_bytes = self.load_logo(config).await;
        let page = compose_page(config, logo_bytes.is_some(), self.footer_date.resolve())?;
        tracing::info!(
            "🃏 Composed {} cards ({:?} header)",
            page.cards.len(),
            page.header.layout
        );

        let mut written = Vec::new();

        for renderer in &self.renderers {
            tracing::debug!("Rendering {} output", renderer.format());
            let document = renderer.render(&page)?;
            self.storage
                .write_file(renderer.file_name(), document.as_bytes())
                .await?;
            tracing::info!("📄 Wrote {}", renderer.file_name());
            written.push(renderer.file_name().to_string());
        }

        if let (Some(bytes), Some(logo)) = (logo_bytes, page.header.logo.as_ref()) {
            self.storage.write_file(&logo.src, &bytes).await?;
            tracing::info!("🖼️ Published logo to {}", logo.src);
            written.push(logo.src.clone());
        }

        Ok(written)
    }

    /// 讀取失敗一律視為沒有 logo
    async fn load_logo(&self, config: &PageConfig) -> Option<Vec<u8>> {
        let logo = config.logo()?;
        if !self.probe.exists(&logo.path) {
            tracing::warn!(
                "⚠️ Logo {} not found, using title-only header",
                logo.path
            );
            return None;
        }

        let source = self.probe.resolve(&logo.path);
        match tokio::fs::read(&source).await {
            Ok(bytes) => {
                tracing::debug!(
                    "Loaded logo {} ({} bytes) for {}",
                    source.display(),
                    bytes.len(),
                    logo_output_path(&logo.path)
                );
                Some(bytes)
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Could not read logo {}: {}, using title-only header",
                    source.display(),
                    e
                );
                None
            }
        }
    }
}
