use crate::models::{Month, Region};

/// Hosted prediction backend, overridable through UNREST_API_URL.
pub const DEFAULT_API_BASE: &str = "https://civil-unrest-forecaster-backend.onrender.com";

/// Months the form currently offers. The holdout set behind the service only
/// covers this horizon.
const DEFAULT_MONTHS: &[&str] = &["2032-01"];

/// Everything the form is parameterized by: where the service lives and which
/// selections it recognizes.
#[derive(Clone, PartialEq, Debug)]
pub struct ForecastConfig {
    pub api_base: String,
    pub regions: Vec<Region>,
    pub months: Vec<Month>,
}

impl ForecastConfig {
    pub fn new(api_base: impl Into<String>, regions: Vec<Region>, months: Vec<Month>) -> Self {
        Self {
            api_base: api_base.into(),
            regions,
            months,
        }
    }

    pub fn from_env() -> Self {
        let api_base =
            std::env::var("UNREST_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self {
            api_base,
            ..Self::default()
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            regions: Region::all(),
            months: DEFAULT_MONTHS
                .iter()
                .filter_map(|token| Month::parse(token))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_offers_all_fifty_regions() {
        let config = ForecastConfig::default();
        assert_eq!(config.regions.len(), 50);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn default_config_offers_the_single_forecast_month() {
        let config = ForecastConfig::default();
        assert_eq!(config.months.len(), 1);
        assert_eq!(config.months[0].token(), "2032-01");
    }

    #[test]
    fn explicit_construction_overrides_everything() {
        let config = ForecastConfig::new(
            "http://127.0.0.1:8000",
            vec![Region::parse("R1").unwrap()],
            vec![Month::parse("2033-06").unwrap()],
        );
        assert_eq!(config.api_base, "http://127.0.0.1:8000");
        assert_eq!(config.regions.len(), 1);
        assert_eq!(config.months[0].label(), "June 2033");
    }
}
