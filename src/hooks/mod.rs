
use crate::models::{Forecast, Month, Region};
use crate::state::{ForecastAction, ForecastState};
use dioxus::prelude::*;

/// Form-facing handle over the shared forecast state: the two selection
/// fields, the last result, and submit().
#[derive(Clone, Copy)]
pub struct ForecastForm {
    state: ForecastState,
}

impl ForecastForm {
    pub fn regions(&self) -> Vec<Region> {
        (self.state.config)().regions
    }

    pub fn months(&self) -> Vec<Month> {
        (self.state.config)().months
    }

    pub fn region(&self) -> Option<Region> {
        (self.state.region)()
    }

    pub fn month(&self) -> Option<Month> {
        (self.state.month)()
    }

    pub fn result(&self) -> Option<Forecast> {
        (self.state.result)()
    }

    pub fn submitting(&self) -> bool {
        (self.state.submitting)()
    }

    /// Both fields chosen and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.region().is_some() && self.month().is_some() && !self.submitting()
    }

    /// Dropdown handler; an unrecognized token clears the selection.
    pub fn select_region(&self, token: &str) {
        let mut region = self.state.region;
        region.set(Region::parse(token));
    }

    pub fn select_month(&self, token: &str) {
        let mut month = self.state.month;
        month.set(Month::parse(token));
    }

    pub fn submit(&self) {
        self.state.action.send(ForecastAction::Submit);
    }
}

pub fn use_forecast_form() -> ForecastForm {
    ForecastForm {
        state: use_context::<ForecastState>(),
    }
}
