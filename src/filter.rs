use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

static POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/qld/(\d+)-([\w-]+)").expect("postcode regex must be valid"));

/// Pulls `(postcode, slug)` out of a suburb url like `.../qld/4101-west-end`.
pub fn postcode_and_slug(url: &str) -> Option<(&str, &str)> {
    let caps = POSTCODE_RE.captures(url)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// `true` if the postcode embedded in `url` lies inside `postcodes`.
/// Urls without a postcode segment (or with one too large to parse) are rejected.
pub fn is_in_region(url: &str, postcodes: &RangeInclusive<u32>) -> bool {
    postcode_and_slug(url)
        .and_then(|(code, _)| code.parse::<u32>().ok())
        .is_some_and(|code| postcodes.contains(&code))
}
