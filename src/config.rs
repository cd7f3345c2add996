use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::{
    FILE_PATH, LISTING_URL, POSTCODE_MAX, POSTCODE_MIN, ROOT_URL, SUBURB_LINK_PREFIX, USER_AGENT,
};

/// Everything the pipeline needs to know about the site it scrapes and where the results go.
/// Built once and handed to [`process_site`](crate::process::process_site) by reference.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page that lists every suburb of the state.
    pub listing_url: String,
    /// Prepended to the relative suburb links found on the listing page.
    pub root_url: String,
    /// Only links whose `href` starts with this are treated as suburb pages.
    pub link_prefix: String,
    pub user_agent: String,
    pub postcodes: RangeInclusive<u32>,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.into(),
            root_url: ROOT_URL.into(),
            link_prefix: SUBURB_LINK_PREFIX.into(),
            user_agent: USER_AGENT.into(),
            postcodes: POSTCODE_MIN..=POSTCODE_MAX,
            output_path: PathBuf::from(FILE_PATH),
        }
    }
}
