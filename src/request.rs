use reqwest::Client;

use crate::{Config, Result};

/// Builds the single client shared by every request of a run.
/// Client uses Arc internally, so the connection pool is reused across the listing and suburb pages.
pub(crate) fn build_client(config: &Config) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Requests a page and returns a `Result<String>` containing the HTML.
/// Non-success status codes are turned into errors.
pub(crate) async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let res = client.get(url).send().await?.error_for_status()?;
    let html = res.text().await?;
    Ok(html)
}
