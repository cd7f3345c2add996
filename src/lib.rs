//! BRISBANE SUBURB SCRAPER
//! Pulls the Queensland suburb listing, keeps the Brisbane postcodes, scrapes every
//! suburb page for market + demographic stats and writes them out as a CSV.

mod config;
mod discover;
mod error;
pub mod export;
pub mod extract;
pub mod filter;
mod macros;
pub mod process;
mod record;
mod request;

pub use config::Config;
pub use discover::parse_suburb_links;
pub use error::{Error, Result};
pub use record::SuburbRecord;

const ROOT_URL: &str = "https://www.yourinvestmentpropertymag.com.au";
const LISTING_URL: &str = "https://www.yourinvestmentpropertymag.com.au/top-suburbs/qld/";
const SUBURB_LINK_PREFIX: &str = "/top-suburbs/qld/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36";
/// Brisbane postcodes, both ends inclusive.
const POSTCODE_MIN: u32 = 4000;
const POSTCODE_MAX: u32 = 4207;
/// Written to the working directory. Earlier exports of this data were named `testing_v2_fix2_BNE.csv`.
const FILE_PATH: &str = "BNE_suburbs.csv";
