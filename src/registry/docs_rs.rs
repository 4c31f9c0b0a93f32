use anyhow::{anyhow, Result};
use colored::Colorize;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use super::SourceHost;

pub const DEFAULT_HOST: &str = "https://docs.rs";

/// Element id docs.rs gives the rendered file in its source browser.
const SOURCE_CODE_SELECTOR: &str = "#source-code";

/// Scrapes license files out of the docs.rs source browser.
pub struct DocsRs {
    client: Client,
    host: String,
    selector: Selector,
}

impl DocsRs {
    pub fn new(host: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                "cargo-attribution/",
                env!("CARGO_PKG_VERSION"),
                " (dependency attribution tool)"
            ))
            .timeout(None::<std::time::Duration>)
            .build()?;

        let selector = Selector::parse(SOURCE_CODE_SELECTOR)
            .map_err(|e| anyhow!("invalid selector {SOURCE_CODE_SELECTOR}: {e}"))?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            selector,
        })
    }

    fn get(&self, url: &str) -> reqwest::Result<Option<String>> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Ok(None);
        }
        response.text().map(Some)
    }
}

impl SourceHost for DocsRs {
    fn crate_url(&self, name: &str, version: &str) -> String {
        format!("{}/crate/{}/{}", self.host, name, version)
    }

    fn fetch_candidate(&self, name: &str, version: &str, file: &str) -> Option<String> {
        let url = format!("{}/source/{}", self.crate_url(name, version), file);

        match self.get(&url) {
            Ok(Some(page)) => extract_source_text(&page, &self.selector),
            Ok(None) => None,
            Err(e) => {
                eprintln!("{} {}: {}", "warning:".yellow().bold(), url, e);
                None
            }
        }
    }
}

/// Text content of the first element matching `selector`, trimmed. Empty
/// matches count as no match.
fn extract_source_text(page: &str, selector: &Selector) -> Option<String> {
    let document = Html::parse_document(page);
    let element = document.select(selector).next()?;
    let text = element.text().collect::<String>();
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
