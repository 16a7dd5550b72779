use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Number of forecasting regions the service recognizes (R1..R50).
pub const REGION_COUNT: u8 = 50;

/// Probability above which a forecast is rendered as high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;

/// One of the fixed region identifiers R1..R50.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Region(u8);

impl Region {
    pub fn new(index: u8) -> Option<Self> {
        (1..=REGION_COUNT).contains(&index).then_some(Self(index))
    }

    /// Parses a region token like "R3". Anything outside R1..R50 is rejected.
    pub fn parse(token: &str) -> Option<Self> {
        let digits = token.strip_prefix('R')?;
        digits.parse::<u8>().ok().and_then(Self::new)
    }

    /// The 50 recognized regions in numeric order.
    pub fn all() -> Vec<Region> {
        (1..=REGION_COUNT).map(Region).collect()
    }

    pub fn id(&self) -> String {
        format!("R{}", self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// A calendar month selection, carried as the first day of the month.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Month(NaiveDate);

impl Month {
    /// Parses a "YYYY-MM" token. Day components or invalid months are rejected.
    pub fn parse(token: &str) -> Option<Self> {
        NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d")
            .ok()
            .map(Self)
    }

    /// The wire token, e.g. "2032-01".
    pub fn token(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    /// The dropdown label, e.g. "January 2032".
    pub fn label(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

/// The forecast record returned by the prediction service. Only ever built by
/// decoding a successful response body, so a value of this type is always
/// fully populated.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Forecast {
    pub region: String,
    pub month: String,
    pub prediction: u8,
    pub probability_of_unrest: f64,
}

impl Forecast {
    pub fn is_unrest(&self) -> bool {
        self.prediction == 1
    }

    pub fn condition_label(&self) -> &'static str {
        if self.is_unrest() {
            "Unrest"
        } else {
            "No Unrest"
        }
    }

    /// Probability rendered as a percentage with two decimals, e.g. "82.00%".
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.probability_of_unrest * 100.0)
    }

    pub fn high_risk(&self) -> bool {
        self.probability_of_unrest > HIGH_RISK_THRESHOLD
    }
}
