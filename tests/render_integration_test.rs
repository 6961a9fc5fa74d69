use anyhow::Result;
use browser_portal::adapters::renderers_for;
use browser_portal::{
    FooterDate, FsAssetProbe, LocalStorage, PageEngine, PortalConfig, RenderedPage,
};
use chrono::NaiveDate;
use tempfile::TempDir;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake";

fn write_site_config(dir: &TempDir, with_logo_file: bool) -> Result<std::path::PathBuf> {
    let config_path = dir.path().join("portal.toml");
    std::fs::write(&config_path, browser_portal::config::toml_config::REFERENCE_CONFIG)?;
    if with_logo_file {
        std::fs::create_dir_all(dir.path().join("assets"))?;
        std::fs::write(dir.path().join("assets/au_logo.png"), PNG_BYTES)?;
    }
    Ok(config_path)
}

#[tokio::test]
async fn test_render_reference_site_with_logo() -> Result<()> {
    let source_dir = TempDir::new()?;
    let output_dir = TempDir::new()?;
    let config_path = write_site_config(&source_dir, true)?;

    let config = PortalConfig::from_file(&config_path)?.to_page_config()?;
    let engine = PageEngine::new(
        LocalStorage::new(output_dir.path().to_str().unwrap().to_string()),
        FsAssetProbe::for_config_file(&config_path),
        renderers_for(&["html", "json"])?,
    )
    .with_footer_date(FooterDate::Fixed(NaiveDate::from_ymd_opt(2025, 10, 2).unwrap()));

    let written = engine.run(&config).await?;
    assert_eq!(written, ["index.html", "page.json", "assets/au_logo.png"]);

    let html = std::fs::read_to_string(output_dir.path().join("index.html"))?;
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<title>Kidney Single-Cell Proteome Browsers</title>"));
    assert!(html.contains(r#"<img src="assets/au_logo.png" width="160""#));
    assert!(html.contains(r#"<a href="https://scp-browser-dct.streamlit.app/" target="_blank" rel="noopener">Open Mouse DCT →</a>"#));
    assert!(html.contains(r#"<a href="mailto:qi.wu@biomed.au.dk">Qi Wu</a>"#));
    assert!(html.contains("Last modified: 2025-10-02"));
    assert!(html.contains("<summary>How to use these browsers (quick guide)</summary>"));
    assert!(html.contains("<strong>Filters</strong>"));

    let kidney = html.find("Open Mouse Kidney →").unwrap();
    let reannotated = html.find("Open Mouse Kidney (Re-annotated) →").unwrap();
    let dct = html.find("Open Mouse DCT →").unwrap();
    assert!(kidney < reannotated && reannotated < dct);

    let logo = std::fs::read(output_dir.path().join("assets/au_logo.png"))?;
    assert_eq!(logo, PNG_BYTES);

    let json = std::fs::read_to_string(output_dir.path().join("page.json"))?;
    let page: RenderedPage = serde_json::from_str(&json)?;
    assert_eq!(page.cards.len(), 3);
    assert_eq!(page.footer.timestamp.unwrap().date, "2025-10-02");
    Ok(())
}

#[tokio::test]
async fn test_missing_logo_falls_back_to_title_only() -> Result<()> {
    let source_dir = TempDir::new()?;
    let output_dir = TempDir::new()?;
    let config_path = write_site_config(&source_dir, false)?;

    let config = PortalConfig::from_file(&config_path)?.to_page_config()?;
    let engine = PageEngine::new(
        LocalStorage::new(output_dir.path().to_str().unwrap().to_string()),
        FsAssetProbe::for_config_file(&config_path),
        renderers_for(&["html"])?,
    )
    .with_footer_date(FooterDate::Omit);

    let written = engine.run(&config).await?;
    assert_eq!(written, ["index.html"]);

    let html = std::fs::read_to_string(output_dir.path().join("index.html"))?;
    assert!(!html.contains("<img"));
    assert!(!html.contains("Last modified"));
    assert!(!output_dir.path().join("assets").exists());
    Ok(())
}
