use chrono::Local;
use reqwest::Client;

use crate::discover::fetch_suburb_links;
use crate::export::{sort_by_owner_rate, write_csv};
use crate::extract::parse_suburb;
use crate::filter::is_in_region;
use crate::request::{build_client, fetch_html};
use crate::{error_time, info_time, Config, Error, Result, SuburbRecord};

/// Runs the whole scrape: listing -> postcode filter -> every suburb page -> sort -> CSV.
/// A suburb that fails to download or parse is logged and left out, it never stops the run.
/// Returns the records in the order they were written.
pub async fn process_site(config: &Config) -> Result<Vec<SuburbRecord>> {
    let start_time = Local::now();
    info_time!("Beginning scrape of {}", config.listing_url);

    let client = build_client(config)?;

    let links = fetch_suburb_links(&client, config).await;
    let suburb_links: Vec<_> = links
        .into_iter()
        .filter(|link| is_in_region(link, &config.postcodes))
        .collect();

    let outcomes = scrape_suburbs(&client, &suburb_links).await;
    let mut records = collect_records(outcomes);
    sort_by_owner_rate(&mut records);

    if write_csv(&config.output_path, &records)? {
        info_time!(
            start_time,
            "Completed scrape: {} suburbs written to {}",
            records.len(),
            config.output_path.display()
        );
    } else {
        info_time!(start_time, "Completed scrape: no suburbs found, nothing written.");
    }

    Ok(records)
}

/// Scrapes the suburbs one after another, keeping each outcome next to its url.
async fn scrape_suburbs(client: &Client, links: &[String]) -> Vec<(String, Result<SuburbRecord>)> {
    let mut outcomes = Vec::with_capacity(links.len());
    for link in links {
        let res = scrape_suburb(client, link).await;
        outcomes.push((link.clone(), res));
    }
    outcomes
}

async fn scrape_suburb(client: &Client, url: &str) -> Result<SuburbRecord> {
    let html = fetch_html(client, url).await?;
    parse_suburb(html, url.to_string()).await
}

/// Logs the failures and keeps the successful records in scrape order.
fn collect_records(outcomes: Vec<(String, Result<SuburbRecord>)>) -> Vec<SuburbRecord> {
    outcomes
        .into_iter()
        .filter_map(|(url, res)| match res {
            Ok(record) => Some(record),
            Err(e) => {
                log_failure(&url, &e);
                None
            }
        })
        .collect()
}

fn log_failure(url: &str, e: &Error) {
    error_time!("Error scraping {url}: {e}");
}
