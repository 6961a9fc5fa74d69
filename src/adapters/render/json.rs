use crate::domain::model::RenderedPage;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;

/// 將頁面描述樹原樣輸出為 JSON，供其他呈現層使用
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn format(&self) -> &'static str {
        "json"
    }

    fn file_name(&self) -> &str {
        "page.json"
    }

    fn render(&self, page: &RenderedPage) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }
}
