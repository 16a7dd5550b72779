use crate::components::toast::{ToastManager, ToastType};
use crate::config::ForecastConfig;
use crate::models::{Forecast, Month, Region};
use crate::services::{ForecastService, ProductionForecastService};
use dioxus::prelude::*;
use futures_util::StreamExt;

pub enum ForecastAction {
    Submit,
}

/// All state the form owns. A forecast is present only after a successful
/// submission and is replaced wholesale by the next one; failed calls leave
/// it untouched.
#[derive(Clone, Copy)]
pub struct ForecastState {
    pub region: Signal<Option<Region>>,
    pub month: Signal<Option<Month>>,
    pub result: Signal<Option<Forecast>>,
    pub submitting: Signal<bool>,
    pub config: Signal<ForecastConfig>,
    pub action: Coroutine<ForecastAction>,
}

#[component]
pub fn ForecastStateProvider(config: ForecastConfig, children: Element) -> Element {
    let service = use_hook({
        let api_base = config.api_base.clone();
        move || ProductionForecastService::new(api_base)
    });
    let state = use_forecast_state(config, service);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

pub fn use_forecast_state<S: ForecastService>(config: ForecastConfig, service: S) -> ForecastState {
    let region = use_signal(|| None);
    let month = use_signal(|| None);
    let mut result = use_signal(|| None);
    let mut submitting = use_signal(|| false);
    let config = use_signal(|| config);

    let toast_manager = use_context::<ToastManager>();

    let service_action = service.clone();
    let action = use_coroutine(move |mut rx: UnboundedReceiver<ForecastAction>| {
        let service = service_action.clone();
        let mut toasts = toast_manager;
        async move {
            while let Some(msg) = rx.next().await {
                match msg {
                    ForecastAction::Submit => {
                        let (Some(region), Some(month)) = (*region.peek(), *month.peek()) else {
                            toasts.show("Select a region and a month first.", ToastType::Error);
                            continue;
                        };
                        if *submitting.peek() {
                            // The submit control is disabled while a request
                            // is in flight, so this only guards stray sends.
                            continue;
                        }

                        submitting.set(true);
                        match service.fetch_forecast(region, month).await {
                            Ok(forecast) => result.set(Some(forecast)),
                            Err(e) => {
                                tracing::error!("Forecast request failed: {}", e);
                                toasts.show(&e.user_friendly_message(), ToastType::Error);
                            }
                        }
                        submitting.set(false);
                    }
                }
            }
        }
    });

    ForecastState {
        region,
        month,
        result,
        submitting,
        config,
        action,
    }
}
