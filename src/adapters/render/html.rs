use crate::domain::model::{
    CardView, FooterBlock, HeaderBlock, HeaderLayout, InstructionsBlock, RenderedPage, Theme,
};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use pulldown_cmark::{html, Event, Options, Parser};
use std::fmt::Write as _;

/// 產生完整的 HTML5 文件。所有文字在此跳脫。
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    file_name: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            file_name: "index.html".to_string(),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn format(&self) -> &'static str {
        "html"
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, page: &RenderedPage) -> Result<String> {
        let mut body = String::new();
        body.push_str(&render_header(&page.header));
        body.push_str(&render_instructions(&page.instructions));
        body.push_str("<hr>\n");
        body.push_str(&render_cards(&page.cards));
        body.push_str("<hr>\n");
        body.push_str(&render_footer(&page.footer));

        Ok(format!(
            r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{style}
</style>
</head>
<body>
<main class="block-container">
{body}</main>
</body>
</html>
"#,
            title = escape_html(&page.title),
            style = stylesheet(&page.theme),
            body = body,
        ))
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"  body {{ font-family: "Source Sans Pro", system-ui, sans-serif; margin: 0; color: rgba(0,0,0,0.87); }}
  .block-container {{ max-width: 1200px; margin: 0 auto; padding: 1.5rem 1rem 2rem 1rem; }}
  h1 {{ margin-top: 0.2rem; margin-bottom: 4px; }}
  .au-header {{ display: flex; align-items: center; gap: 2rem; }}
  .au-header-logo img {{ display: block; height: auto; }}
  .au-header-text {{ flex: 1; }}
  .au-muted {{ color: {muted}; font-size: 0.95rem; }}
  .au-pill {{
    display: inline-block; padding: 2px 10px; border-radius: 999px;
    background: {light}; color: {primary}; font-weight: 700; font-size: 0.8rem;
    margin-left: 8px; vertical-align: middle;
  }}
  .au-cards {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 2rem; }}
  .au-card {{
    border: 1px solid rgba(0,0,0,0.08);
    border-radius: 14px; padding: 18px 18px 12px 18px; background: #fff;
    transition: box-shadow .15s ease, transform .05s ease;
  }}
  .au-card:hover {{ box-shadow: 0 6px 20px rgba(0,0,0,.08); transform: translateY(-2px); }}
  .au-linkbtn a {{
    text-decoration: none; padding: 10px 14px; border-radius: 10px; font-weight: 700;
    border: 1px solid {primary}; color: {primary};
    display: inline-block; margin-top: 10px;
  }}
  .au-linkbtn a:hover {{ background: {primary}; color: white; }}
  .au-callout {{
    background: {light};
    border-left: 4px solid {primary};
    padding: 10px 14px;
    border-radius: 10px;
    color: rgba(0,0,0,0.85);
    margin-top: 0.35rem;
  }}
  details {{ margin-top: 1rem; border: 1px solid rgba(0,0,0,0.08); border-radius: 10px; padding: 8px 14px; }}
  summary {{ cursor: pointer; font-weight: 600; }}"#,
        primary = theme.primary,
        light = theme.primary_light,
        muted = theme.text_muted,
    )
}

fn render_description(header: &HeaderBlock) -> String {
    let mut html = String::from("<div class=\"au-callout\">\n");
    let _ = writeln!(
        html,
        "  <div><strong>{}</strong></div>",
        escape_html(&header.description.headline)
    );
    if let Some(detail) = &header.description.detail {
        let _ = writeln!(html, "  <div>{}</div>", escape_html(detail));
    }
    html.push_str("</div>\n");
    html
}

fn render_header(header: &HeaderBlock) -> String {
    let title = format!("<h1>{}</h1>\n", escape_html(&header.title));
    let description = render_description(header);

    match (header.layout, &header.logo) {
        (HeaderLayout::TwoColumn, Some(logo)) => format!(
            "<header class=\"au-header\">\n<div class=\"au-header-logo\"><img src=\"{src}\" width=\"{width}\" alt=\"logo\"></div>\n<div class=\"au-header-text\">\n{title}{description}</div>\n</header>\n",
            src = escape_html(&logo.src),
            width = logo.width_px,
        ),
        _ => format!("<header>\n{title}{description}</header>\n"),
    }
}

fn render_instructions(instructions: &InstructionsBlock) -> String {
    if instructions.markdown.trim().is_empty() {
        return String::new();
    }
    format!(
        "<details>\n<summary>{}</summary>\n{}</details>\n",
        escape_html(&instructions.title),
        markdown_to_html(&instructions.markdown)
    )
}

fn render_card(card: &CardView) -> String {
    let target = if card.action.new_context {
        " target=\"_blank\" rel=\"noopener\""
    } else {
        ""
    };
    format!(
        "<section>\n<h3>{name} <span class=\"au-pill\">{label}</span></h3>\n<div class=\"au-card\">{blurb}</div>\n<div class=\"au-linkbtn\"><a href=\"{href}\"{target}>{text}</a></div>\n</section>\n",
        name = escape_html(&card.name),
        label = escape_html(&card.label),
        blurb = escape_html(&card.blurb),
        href = escape_html(&card.action.href),
        text = escape_html(&card.action.text),
    )
}

fn render_cards(cards: &[CardView]) -> String {
    let mut html = String::from("<div class=\"au-cards\">\n");
    for card in cards {
        html.push_str(&render_card(card));
    }
    html.push_str("</div>\n");
    html
}

fn render_footer(footer: &FooterBlock) -> String {
    let mut html = String::from("<footer class=\"au-muted\">\n");
    let _ = writeln!(
        html,
        "  <div>Questions or feedback? Contact <a href=\"{}\">{}</a>.</div>",
        escape_html(&footer.contact.href),
        escape_html(&footer.contact.name)
    );
    if let Some(timestamp) = &footer.timestamp {
        let _ = writeln!(
            html,
            "  <div style=\"margin-top: 0.25rem;\">{}: {}</div>",
            escape_html(&timestamp.label),
            escape_html(&timestamp.date)
        );
    }
    html.push_str("</footer>\n");
    html
}

/// 說明區塊的 markdown；原始 HTML 一律當作文字輸出
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
