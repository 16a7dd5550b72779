#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    unrest_forecaster::run_app();
}
