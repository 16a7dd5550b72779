use crate::error::AppError;
use crate::models::{Forecast, Month, Region};
use once_cell::sync::Lazy;
use reqwest::header::CONTENT_TYPE;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("UnrestForecaster-Desktop/1.0")
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("Failed to build reqwest client")
});

/// Thin client for the prediction endpoint. One GET per submission, no
/// retries.
#[derive(Clone, PartialEq, Debug)]
pub struct ForecastApi {
    api_base: String,
}

impl ForecastApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn predict_url(&self, region: Region, month: Month) -> String {
        format!(
            "{}/predict?region={}&month={}",
            self.api_base, region, month
        )
    }

    pub async fn predict(&self, region: Region, month: Month) -> Result<Forecast, AppError> {
        let res = CLIENT
            .get(self.predict_url(region, month))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(AppError::Api {
                status: res.status(),
            });
        }

        // Decoded by hand so an unparseable body surfaces as Malformed
        // instead of a generic reqwest error.
        let body = res.text().await?;
        let forecast: Forecast = serde_json::from_str(&body)?;
        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selections() -> (Region, Month) {
        (
            Region::parse("R3").unwrap(),
            Month::parse("2032-01").unwrap(),
        )
    }

    #[test]
    fn predict_url_carries_both_query_parameters() {
        let api = ForecastApi::new("https://forecaster.example.com");
        let (region, month) = selections();
        assert_eq!(
            api.predict_url(region, month),
            "https://forecaster.example.com/predict?region=R3&month=2032-01"
        );
    }

    #[test]
    fn predict_url_tolerates_trailing_slash_in_base() {
        let api = ForecastApi::new("http://127.0.0.1:8000/");
        let (region, month) = selections();
        assert_eq!(
            api.predict_url(region, month),
            "http://127.0.0.1:8000/predict?region=R3&month=2032-01"
        );
    }
}
