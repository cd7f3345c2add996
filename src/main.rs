use suburb_scrap::{process::process_site, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    process_site(&Config::default()).await?;
    Ok(())
}
