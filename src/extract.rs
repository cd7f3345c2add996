use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::filter::postcode_and_slug;
use crate::{Error, Result, SuburbRecord};

static OWNER_RATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}\.\d{1,2})%").expect("owner rate regex must be valid"));
static INCOME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([\d,]+)").expect("income regex must be valid"));

/// Parses a fetched suburb page on the blocking pool, `Html` isn't `Send`.
pub(crate) async fn parse_suburb(html: String, url: String) -> Result<SuburbRecord> {
    spawn_blocking(move || extract_suburb(&html, &url)).await?
}

/// Turns a suburb page into a record.
/// Name and postcode come from `url`, everything else from the page. Sections that are missing
/// from the page simply leave their fields unset.
pub fn extract_suburb(html: &str, url: &str) -> Result<SuburbRecord> {
    let (postcode, slug) =
        postcode_and_slug(url).ok_or_else(|| Error::MissingPostcode(url.to_string()))?;
    let mut record = SuburbRecord::new(title_case(&slug.replace('-', " ")), postcode);

    let doc = Html::parse_document(html);

    let prose = extract_prose(&doc)?;
    record.owner_occupier_2011 = prose.owner_occupier_2011;
    record.owner_occupier_2016 = prose.owner_occupier_2016;

    extract_market_data(&doc, &mut record)?;
    extract_demographics(&doc, &mut record)?;

    Ok(record)
}

/// What the paragraphs of the tabbed content say.
/// `household_income` is usually a weekly figure, so it never goes into a [`SuburbRecord`],
/// whose income columns hold the yearly amounts of the demographics table.
#[derive(Debug, Default, PartialEq)]
pub struct ProseStats {
    pub owner_occupier_2011: Option<String>,
    pub owner_occupier_2016: Option<String>,
    pub household_income: Option<String>,
}

/// Owner occupier rates and median household income from the paragraphs of the tabbed content.
pub fn extract_prose(doc: &Html) -> Result<ProseStats> {
    let paragraph_selector = create_selector("div#pills-tabContent p")?;
    let mut stats = ProseStats::default();

    for p in doc.select(&paragraph_selector) {
        let text = stripped_text(p).to_lowercase();

        if text.contains("owner-occupied") {
            let mut rates = OWNER_RATE_RE
                .captures_iter(&text)
                .map(|caps| format!("{}%", &caps[1]));
            match (rates.next(), rates.next()) {
                (Some(earlier), Some(later)) => {
                    stats.owner_occupier_2011 = Some(earlier);
                    stats.owner_occupier_2016 = Some(later);
                }
                (Some(earlier), None) => stats.owner_occupier_2011 = Some(earlier),
                _ => {}
            }
        }

        // First paragraph mentioning an amount wins.
        if text.contains("median household income") && stats.household_income.is_none() {
            if let Some(caps) = INCOME_RE.captures(&text) {
                stats.household_income = Some(caps[1].replace(',', ""));
            }
        }
    }
    Ok(stats)
}

/// `div.key-market-data`: rows of `label | houses value`, values copied as shown.
fn extract_market_data(doc: &Html, record: &mut SuburbRecord) -> Result<()> {
    let section_selector = create_selector("div.key-market-data")?;
    let row_selector = create_selector("table tbody tr")?;
    let cell_selector = create_selector("td")?;

    let Some(section) = doc.select(&section_selector).next() else {
        return Ok(());
    };

    for row in section.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 2 {
            continue;
        }
        let label = stripped_text(cells[0]).to_lowercase();
        let value = stripped_text(cells[1]);

        if label.contains("median price") {
            record.median_price = Some(value.clone());
        }
        if label.contains("average annual growth") {
            record.annual_growth = Some(value.clone());
        }
        if label.contains("weekly median rent") {
            record.median_rent = Some(value.clone());
        }
        if label.contains("avg. days on market") || label.contains("average days on market") {
            record.days_on_market = Some(value);
        }
    }
    Ok(())
}

/// `div.key-demographics`: rows of `label | 2011 | 2016`, each value wrapped in a `span`.
fn extract_demographics(doc: &Html, record: &mut SuburbRecord) -> Result<()> {
    let section_selector = create_selector("div.key-demographics")?;
    let row_selector = create_selector("table tbody tr")?;
    let cell_selector = create_selector("td")?;
    let value_selector = create_selector("span")?;

    let Some(section) = doc.select(&section_selector).next() else {
        return Ok(());
    };

    for row in section.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 3 {
            continue;
        }
        let label = stripped_text(cells[0]).to_lowercase();
        let span_text = |cell: ElementRef| {
            cell.select(&value_selector)
                .next()
                .map(stripped_text)
                .unwrap_or_default()
        };
        let earlier = span_text(cells[1]);
        let later = span_text(cells[2]);

        if label.contains("total population") {
            record.population_2011 = Some(earlier.clone());
            record.population_2016 = Some(later.clone());
        }
        if label.contains("population change") {
            record.population_growth_2011 = clean_percentage(&earlier);
            record.population_growth_2016 = clean_percentage(&later);
        }
        if label.contains("household income change") {
            record.income_growth_2011 = clean_percentage(&earlier);
            record.income_growth_2016 = clean_percentage(&later);
        }
        if label.contains("median household income") {
            record.household_income_2011 = Some(strip_currency(&earlier));
            record.household_income_2016 = Some(strip_currency(&later));
        }
        if label.contains("median age") {
            record.median_age_2011 = Some(earlier);
            record.median_age_2016 = Some(later);
        }
    }
    Ok(())
}

/// `"+4.20%"` -> `4.2`. Empty or unparseable input gives `None`.
pub fn clean_percentage(value: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    value.replace(['%', '+'], "").trim().parse().ok()
}

/// `"$85,000"` -> `"85000"`
fn strip_currency(value: &str) -> String {
    value.replace(['$', ','], "")
}

/// Upper-cases the first letter of every word and lower-cases the rest,
/// a word being a run of letters.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

/// All text nodes under `el`, each trimmed, empty ones dropped, concatenated without separator.
fn stripped_text(el: ElementRef) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

#[inline]
pub(crate) fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://site.test/top-suburbs/qld/4101-example-suburb";
    const PAGE: &str = include_str!("../tests/fixtures/suburb_4101.html");

    #[test]
    fn full_page() {
        let record = extract_suburb(PAGE, URL).unwrap();
        let expected = SuburbRecord {
            name: "Example Suburb".into(),
            postcode: "4101".into(),
            owner_occupier_2011: Some("65.20%".into()),
            owner_occupier_2016: Some("70.10%".into()),
            median_price: Some("$750,000".into()),
            annual_growth: Some("6.5%".into()),
            median_rent: Some("$520".into()),
            days_on_market: Some("28".into()),
            population_2011: Some("10,500".into()),
            population_2016: Some("11,200".into()),
            population_growth_2011: Some(4.2),
            population_growth_2016: Some(6.67),
            household_income_2011: Some("85000".into()),
            household_income_2016: Some("95500".into()),
            income_growth_2011: Some(-1.5),
            income_growth_2016: None,
            median_age_2011: Some("34".into()),
            median_age_2016: Some("35".into()),
        };
        assert_eq!(record, expected);
    }

    #[test]
    fn empty_page_keeps_identity_only() {
        let record = extract_suburb("<html><body></body></html>", URL).unwrap();
        assert_eq!(record, SuburbRecord::new("Example Suburb", "4101"));
    }

    #[test]
    fn url_without_postcode_fails() {
        let res = extract_suburb(PAGE, "https://site.test/top-suburbs/qld/example");
        assert!(matches!(res, Err(Error::MissingPostcode(_))));
    }

    #[test]
    fn single_owner_rate_sets_earlier_only() {
        let html = r#"<div id="pills-tabContent">
            <p>About 58.3% of homes are Owner-Occupied.</p>
        </div>"#;
        let record = extract_suburb(html, URL).unwrap();
        assert_eq!(record.owner_occupier_2011.as_deref(), Some("58.3%"));
        assert_eq!(record.owner_occupier_2016, None);
    }

    #[test]
    fn prose_income_stays_out_of_record() {
        let html = r#"<div id="pills-tabContent">
            <p>The median household income is <strong>$1,850</strong> per week.</p>
        </div>"#;
        let record = extract_suburb(html, URL).unwrap();
        assert_eq!(record.household_income_2011, None);
        assert_eq!(record.household_income_2016, None);
    }

    #[test]
    fn first_prose_income_wins() {
        let html = r#"<div id="pills-tabContent">
            <p>The median household income is <b>$1,850</b> per week.</p>
            <p>Median household income was $2,000 last year.</p>
        </div>"#;
        let stats = extract_prose(&Html::parse_document(html)).unwrap();
        assert_eq!(stats.household_income.as_deref(), Some("1850"));
    }

    #[test]
    fn later_single_owner_rate_overwrites_earlier_only() {
        let html = r#"<div id="pills-tabContent">
            <p>Owner-occupied housing was 65.20% in 2011 and 70.10% in 2016.</p>
            <p>Across the region owner-occupied homes sit at 61.5%.</p>
        </div>"#;
        let record = extract_suburb(html, URL).unwrap();
        assert_eq!(record.owner_occupier_2011.as_deref(), Some("61.5%"));
        assert_eq!(record.owner_occupier_2016.as_deref(), Some("70.10%"));
    }

    #[test]
    fn paragraphs_outside_tabs_ignored() {
        let html = r#"<p>owner-occupied housing was 65.20% in 2011 and 70.10% in 2016</p>"#;
        let record = extract_suburb(html, URL).unwrap();
        assert_eq!(record.owner_occupier_2011, None);
    }

    #[test]
    fn demographics_row_without_span_is_empty_string() {
        let html = r#"<div class="key-demographics"><table><tbody>
            <tr><td>Median age</td><td>34</td><td><span>35</span></td></tr>
            <tr><td>Too short</td><td><span>1</span></td></tr>
        </tbody></table></div>"#;
        let record = extract_suburb(html, URL).unwrap();
        assert_eq!(record.median_age_2011.as_deref(), Some(""));
        assert_eq!(record.median_age_2016.as_deref(), Some("35"));
    }

    #[test]
    fn market_days_label_spellings() {
        for label in ["Avg. days on market", "Average days on market (12m)"] {
            let html = format!(
                r#"<div class="key-market-data"><table><tbody>
                <tr><td>{label}</td><td>41</td></tr>
                </tbody></table></div>"#
            );
            let record = extract_suburb(&html, URL).unwrap();
            assert_eq!(record.days_on_market.as_deref(), Some("41"));
        }
    }

    #[test]
    fn percentage_cleaner() {
        assert_eq!(clean_percentage("+4.20%"), Some(4.2));
        assert_eq!(clean_percentage("12.5%"), Some(12.5));
        assert_eq!(clean_percentage(" 0.75% "), Some(0.75));
        assert_eq!(clean_percentage("-1.50%"), Some(-1.5));
        assert_eq!(clean_percentage(""), None);
        assert_eq!(clean_percentage("n/a"), None);
        assert_eq!(clean_percentage("%"), None);
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("example suburb"), "Example Suburb");
        assert_eq!(title_case("WEST end"), "West End");
        assert_eq!(title_case("o'connell"), "O'Connell");
    }
}
