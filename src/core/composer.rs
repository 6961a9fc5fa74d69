//! 將已驗證的 `PageConfig` 組成頁面描述樹。
//!
//! 這裡不產生任何標記語言；跳脫與排版由 `adapters::render` 負責。

use crate::domain::model::{
    BrowserEntry, CardAction, CardView, ContactLink, FooterBlock, FooterTimestamp, HeaderBlock,
    HeaderLayout, LogoView, PageConfig, RenderedPage, CARD_STATUS_LABEL,
};
use crate::utils::error::{PortalError, Result};
use chrono::NaiveDate;
use std::path::Path;

/// 已發佈 logo 在輸出目錄中的位置
pub const ASSETS_DIR: &str = "assets";

fn file_name_of(path: &str) -> Option<&str> {
    Path::new(path).file_name().and_then(|name| name.to_str())
}

pub fn logo_output_path(logo_path: &str) -> String {
    let file_name = file_name_of(logo_path).unwrap_or(logo_path);
    format!("{}/{}", ASSETS_DIR, file_name)
}

pub fn compose_header(config: &PageConfig, logo_exists: bool) -> HeaderBlock {
    let logo = config.logo().filter(|_| logo_exists).map(|logo| LogoView {
        src: logo_output_path(&logo.path),
        width_px: logo.width_px,
    });

    let layout = if logo.is_some() {
        HeaderLayout::TwoColumn
    } else {
        HeaderLayout::TitleOnly
    };

    HeaderBlock {
        layout,
        logo,
        title: config.title().to_string(),
        description: config.description().clone(),
    }
}

pub fn compose_cards(entries: &[BrowserEntry]) -> Result<Vec<CardView>> {
    if entries.is_empty() {
        return Err(PortalError::ConfigError {
            message: "cannot compose a page without browser entries".to_string(),
        });
    }

    Ok(entries
        .iter()
        .map(|entry| CardView {
            name: entry.name.clone(),
            url: entry.url.clone(),
            blurb: entry.blurb.clone(),
            label: CARD_STATUS_LABEL.to_string(),
            action: CardAction {
                text: format!("Open {} →", entry.name),
                href: entry.url.clone(),
                new_context: true,
            },
        })
        .collect())
}

/// 日期於每次呈現時取當地今天
pub fn compose_footer(config: &PageConfig, include_timestamp: bool) -> FooterBlock {
    let today = include_timestamp.then(|| chrono::Local::now().date_naive());
    compose_footer_on(config, today)
}

pub fn compose_footer_on(config: &PageConfig, date: Option<NaiveDate>) -> FooterBlock {
    FooterBlock {
        contact: ContactLink {
            name: config.contact_name().to_string(),
            email: config.contact_email().to_string(),
            href: format!("mailto:{}", config.contact_email()),
        },
        timestamp: date.map(|date| FooterTimestamp {
            label: config.footer().timestamp_label.clone(),
            date: date.format("%Y-%m-%d").to_string(),
        }),
    }
}

/// 組合整頁。`today` 為 None 時頁尾不帶日期。
pub fn compose_page(
    config: &PageConfig,
    logo_exists: bool,
    today: Option<NaiveDate>,
) -> Result<RenderedPage> {
    let cards = compose_cards(config.entries())?;
    let date = today.filter(|_| config.footer().include_timestamp);

    tracing::debug!(
        cards = cards.len(),
        logo = logo_exists,
        timestamp = date.is_some(),
        "composed page"
    );

    Ok(RenderedPage {
        title: config.title().to_string(),
        header: compose_header(config, logo_exists),
        instructions: config.instructions().clone(),
        cards,
        footer: compose_footer_on(config, date),
        theme: config.theme().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::PortalConfig;
    use regex::Regex;

    fn page_config(with_logo: bool) -> PageConfig {
        let mut content = r#"
[page]
title = "Kidney Browsers"
headline = "Interactive browsers"
detail = "Explore UMAPs."

[contact]
name = "Qi Wu"
email = "qi.wu@biomed.au.dk"

[[browsers]]
name = "Kidney"
url = "https://a/"
blurb = "blurb A"

[[browsers]]
name = "DCT"
url = "https://b/"
blurb = "blurb B"
"#
        .to_string();
        if with_logo {
            content.push_str("\n[logo]\npath = \"assets/au_logo.png\"\nwidth_px = 200\n");
        }
        PortalConfig::from_toml_str(&content)
            .unwrap()
            .to_page_config()
            .unwrap()
    }

    #[test]
    fn test_header_with_logo_is_two_column() {
        let config = page_config(true);
        let header = compose_header(&config, true);

        assert_eq!(header.layout, HeaderLayout::TwoColumn);
        let logo = header.logo.unwrap();
        assert_eq!(logo.src, "assets/au_logo.png");
        assert_eq!(logo.width_px, 200);
        assert_eq!(header.title, "Kidney Browsers");
    }

    #[test]
    fn test_header_without_logo_asset_is_title_only() {
        let config = page_config(true);
        let header = compose_header(&config, false);

        assert_eq!(header.layout, HeaderLayout::TitleOnly);
        assert!(header.logo.is_none());
        assert_eq!(header.description.detail.as_deref(), Some("Explore UMAPs."));
    }

    #[test]
    fn test_header_without_configured_logo_ignores_flag() {
        let config = page_config(false);
        let header = compose_header(&config, true);
        assert_eq!(header.layout, HeaderLayout::TitleOnly);
        assert!(header.logo.is_none());
    }

    #[test]
    fn test_cards_preserve_order_and_fields() {
        let entries = vec![
            BrowserEntry::new("Zeta", "https://z.example/", "last alphabetically"),
            BrowserEntry::new("Alpha", "https://a.example/", "first alphabetically"),
            BrowserEntry::new("Mid", "https://m.example/", ""),
            BrowserEntry::new("Extra", "https://e.example/", "fourth card"),
        ];
        let cards = compose_cards(&entries).unwrap();

        assert_eq!(cards.len(), entries.len());
        for (card, entry) in cards.iter().zip(&entries) {
            assert_eq!(card.name, entry.name);
            assert_eq!(card.url, entry.url);
            assert_eq!(card.blurb, entry.blurb);
            assert_eq!(card.label, "Live");
            assert_eq!(card.action.href, entry.url);
            assert_eq!(card.action.text, format!("Open {} →", entry.name));
            assert!(card.action.new_context);
        }
    }

    #[test]
    fn test_empty_cards_is_configuration_error() {
        let err = compose_cards(&[]).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_footer_timestamp_is_iso_date() {
        let config = page_config(false);
        let footer = compose_footer(&config, true);

        let date_re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        let timestamp = footer.timestamp.unwrap();
        assert!(date_re.is_match(&timestamp.date));
        assert_eq!(timestamp.label, "Last modified");
        assert_eq!(footer.contact.href, "mailto:qi.wu@biomed.au.dk");
        assert_eq!(footer.contact.name, "Qi Wu");
    }

    #[test]
    fn test_footer_without_timestamp() {
        let config = page_config(false);
        assert!(compose_footer(&config, false).timestamp.is_none());
    }

    #[test]
    fn test_compose_is_idempotent() {
        let config = page_config(true);
        let date = NaiveDate::from_ymd_opt(2025, 9, 1);

        assert_eq!(compose_header(&config, true), compose_header(&config, true));
        assert_eq!(
            compose_cards(config.entries()).unwrap(),
            compose_cards(config.entries()).unwrap()
        );
        assert_eq!(
            compose_footer_on(&config, date),
            compose_footer_on(&config, date)
        );
        assert_eq!(
            compose_page(&config, true, date).unwrap(),
            compose_page(&config, true, date).unwrap()
        );
    }

    #[test]
    fn test_compose_page_uses_given_date() {
        let config = page_config(false);
        let page = compose_page(&config, false, NaiveDate::from_ymd_opt(2025, 1, 7)).unwrap();

        assert_eq!(page.footer.timestamp.unwrap().date, "2025-01-07");
        assert_eq!(page.cards.len(), 2);
        assert_eq!(page.title, "Kidney Browsers");
    }

    #[test]
    fn test_logo_output_path_uses_file_name() {
        assert_eq!(logo_output_path("/srv/static/au_logo.png"), "assets/au_logo.png");
        assert_eq!(logo_output_path("logo.svg"), "assets/logo.svg");
    }
}
