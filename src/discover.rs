use reqwest::Client;
use scraper::Html;
use tokio::task::spawn_blocking;

use crate::extract::create_selector;
use crate::request::fetch_html;
use crate::{error_time, Config, Result};

/// Fetches the listing page and returns the absolute urls of every suburb page on it.
/// Never fails: a failed request or a page without the suburb list is logged and yields no links.
pub(crate) async fn fetch_suburb_links(client: &Client, config: &Config) -> Vec<String> {
    match try_fetch_suburb_links(client, config).await {
        Ok(Some(links)) => links,
        Ok(None) => {
            error_time!("Could not find suburb list section on {}", config.listing_url);
            Vec::new()
        }
        Err(e) => {
            error_time!("Couldn't fetch suburb links from {}: {e}", config.listing_url);
            Vec::new()
        }
    }
}

async fn try_fetch_suburb_links(client: &Client, config: &Config) -> Result<Option<Vec<String>>> {
    let html = fetch_html(client, &config.listing_url).await?;
    let config = config.clone();
    spawn_blocking(move || parse_suburb_links(&html, &config)).await?
}

/// Collects the suburb links inside `div.suburb-list`, resolved against `config.root_url`.
/// Returns `Ok(None)` when the page has no suburb list at all.
pub fn parse_suburb_links(html: &str, config: &Config) -> Result<Option<Vec<String>>> {
    let doc = Html::parse_document(html);
    let list_selector = create_selector("div.suburb-list")?;
    let anchor_selector = create_selector("a")?;

    let Some(list) = doc.select(&list_selector).next() else {
        return Ok(None);
    };

    let links = list
        .select(&anchor_selector)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.starts_with(&config.link_prefix))
        .map(|href| format!("{}{href}", config.root_url))
        .collect();
    Ok(Some(links))
}
