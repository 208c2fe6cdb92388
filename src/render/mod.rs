pub mod html;
pub mod icons;
pub mod reveal;
pub mod text;

pub use reveal::Reveal;

use derive_more::Display;
use std::str::FromStr;

use crate::config::Theme;
use crate::error::Result;
use crate::page::Page;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Format {
    #[display(fmt = "text")]
    Text,
    #[display(fmt = "html")]
    Html,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "html" => Ok(Format::Html),
            other => Err(format!("unknown output format '{}' (text, html)", other)),
        }
    }
}

pub fn render(page: &Page, theme: &Theme, format: Format) -> Result<String> {
    log::debug!(
        "Rendering {} as {} ({} cells, {} highlights)",
        page.heading(),
        format,
        page.cells().len(),
        page.highlights.len()
    );

    match format {
        Format::Text => text::render(page, theme),
        Format::Html => html::render(page, theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn parse_format() {
        assert_eq!("text".parse::<Format>(), Ok(Format::Text));
        assert_eq!("HTML".parse::<Format>(), Ok(Format::Html));
        assert!("pdf".parse::<Format>().is_err());
        assert_eq!(Format::Html.to_string(), "html");
    }

    #[test]
    fn dispatch_by_format() {
        let config = Config::default();
        let page = Page::from_config(&config).unwrap();

        let text = render(&page, &config.theme, Format::Text).unwrap();
        assert!(text.starts_with("Welcome to\n"));

        let html = render(&page, &config.theme, Format::Html).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
