use serde::Serialize;

/// One scraped suburb. Field order here is the CSV column order.
///
/// Every field is always present; anything the page didn't provide stays `None` and is
/// written as an empty cell, so every row has the same columns.
/// Text values are kept exactly as shown on the page, growth rates are parsed numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuburbRecord {
    #[serde(rename = "Suburb Name")]
    pub name: String,
    #[serde(rename = "Postcode")]
    pub postcode: String,

    #[serde(rename = "Owner Occupier Rate 2011")]
    pub owner_occupier_2011: Option<String>,
    #[serde(rename = "Owner Occupier Rate 2016")]
    pub owner_occupier_2016: Option<String>,

    #[serde(rename = "Median House Price")]
    pub median_price: Option<String>,
    #[serde(rename = "Annual Growth (%)")]
    pub annual_growth: Option<String>,
    #[serde(rename = "Median Rent ($/wk)")]
    pub median_rent: Option<String>,
    #[serde(rename = "Avg Days on Market (12m)")]
    pub days_on_market: Option<String>,

    #[serde(rename = "Total Population 2011")]
    pub population_2011: Option<String>,
    #[serde(rename = "Total Population 2016")]
    pub population_2016: Option<String>,
    #[serde(rename = "Population Growth (5y %) At 2011")]
    pub population_growth_2011: Option<f64>,
    #[serde(rename = "Population Growth (5y %) At 2016")]
    pub population_growth_2016: Option<f64>,
    #[serde(rename = "Median Household Income 2011")]
    pub household_income_2011: Option<String>,
    #[serde(rename = "Median Household Income 2016")]
    pub household_income_2016: Option<String>,
    #[serde(rename = "Household Income Growth (5y %) At 2011")]
    pub income_growth_2011: Option<f64>,
    #[serde(rename = "Household Income Growth (5y %) At 2016")]
    pub income_growth_2016: Option<f64>,
    #[serde(rename = "Median Age 2011")]
    pub median_age_2011: Option<String>,
    #[serde(rename = "Median Age 2016")]
    pub median_age_2016: Option<String>,
}

impl SuburbRecord {
    /// Identity only, every statistic unset.
    pub fn new(name: impl Into<String>, postcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            postcode: postcode.into(),
            ..Self::default()
        }
    }
}
