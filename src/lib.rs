#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod models;
pub mod services;
pub mod state;
pub mod views;

#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use components::toast::ToastProvider;
use config::ForecastConfig;
use state::ForecastStateProvider;
use views::forecast::ForecastPage;

pub const WINDOW_WIDTH: f64 = 520.0;
pub const WINDOW_HEIGHT: f64 = 720.0;

pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        ToastProvider {
            ForecastStateProvider { config: ForecastConfig::from_env(), ForecastPage {} }
        }
    }
}

#[cfg(feature = "desktop")]
pub fn run_app() {
    tracing_subscriber::fmt::init();

    let config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Civil Unrest Forecaster")
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(false),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}
