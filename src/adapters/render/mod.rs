pub mod html;
pub mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use crate::domain::ports::Renderer;
use crate::utils::error::{PortalError, Result};

pub const SUPPORTED_FORMATS: [&str; 2] = ["html", "json"];

pub fn renderer_for(format: &str) -> Result<Box<dyn Renderer>> {
    match format.trim().to_ascii_lowercase().as_str() {
        "html" => Ok(Box::new(HtmlRenderer::default())),
        "json" => Ok(Box::new(JsonRenderer)),
        other => Err(PortalError::InvalidConfigValueError {
            field: "format".to_string(),
            value: other.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                SUPPORTED_FORMATS.join(", ")
            ),
        }),
    }
}

/// 依序建立 renderer，重複的格式只保留第一個
pub fn renderers_for<S: AsRef<str>>(formats: &[S]) -> Result<Vec<Box<dyn Renderer>>> {
    let mut renderers: Vec<Box<dyn Renderer>> = Vec::new();
    for format in formats {
        let renderer = renderer_for(format.as_ref())?;
        if renderers.iter().all(|r| r.format() != renderer.format()) {
            renderers.push(renderer);
        }
    }
    if renderers.is_empty() {
        return Err(PortalError::MissingConfigError {
            field: "format".to_string(),
        });
    }
    Ok(renderers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_for_known_formats() {
        assert_eq!(renderer_for("html").unwrap().file_name(), "index.html");
        assert_eq!(renderer_for(" JSON ").unwrap().file_name(), "page.json");
        assert!(renderer_for("pdf").is_err());
    }

    #[test]
    fn test_renderers_for_deduplicates() {
        let renderers = renderers_for(&["html", "json", "html"]).unwrap();
        let formats: Vec<&str> = renderers.iter().map(|r| r.format()).collect();
        assert_eq!(formats, ["html", "json"]);

        let none: [&str; 0] = [];
        assert!(renderers_for(&none).is_err());
    }
}
