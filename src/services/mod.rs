pub mod forecast;

use crate::error::AppError;
use crate::models::{Forecast, Month, Region};
use async_trait::async_trait;

#[async_trait]
pub trait ForecastService: Clone + Send + Sync + 'static {
    async fn fetch_forecast(&self, region: Region, month: Month) -> Result<Forecast, AppError>;
}

#[derive(Clone, PartialEq)]
pub struct ProductionForecastService {
    api: forecast::ForecastApi,
}

impl ProductionForecastService {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api: forecast::ForecastApi::new(api_base),
        }
    }
}

#[async_trait]
impl ForecastService for ProductionForecastService {
    async fn fetch_forecast(&self, region: Region, month: Month) -> Result<Forecast, AppError> {
        self.api.predict(region, month).await
    }
}
