use crate::hooks::use_forecast_form;
use crate::icons::*;
use dioxus::prelude::*;

#[component]
pub fn ForecastPage() -> Element {
    let form = use_forecast_form();
    let region = form.region();
    let month = form.month();
    let submitting = form.submitting();
    let result = form.result();

    rsx! {
        div { class: "page",
            section { class: "intro-card",
                div { class: "intro-title",
                    Globe { size: 22 }
                    h1 { "Civil Unrest Forecaster" }
                }
                p { class: "intro-copy",
                    "This tool allows you to view the likelihood of civil unrest in a "
                    "specific region for a given month. Select a region and the month "
                    "for which you would like to see the forecast from the dropdown "
                    "menus below, then click "
                    strong { "View Forecast" }
                    "."
                }
            }

            section { class: "form-card",
                div { class: "field",
                    label { class: "field-label", "Region:" }
                    select {
                        class: "field-select",
                        value: region.map(|r| r.id()).unwrap_or_default(),
                        disabled: submitting,
                        oninput: move |e| form.select_region(&e.value()),
                        option { value: "", disabled: true, selected: region.is_none(),
                            "Select a region"
                        }
                        for r in form.regions() {
                            option { key: "{r}", value: "{r}", "{r}" }
                        }
                    }
                }

                div { class: "field",
                    label { class: "field-label", "Month:" }
                    select {
                        class: "field-select",
                        value: month.map(|m| m.token()).unwrap_or_default(),
                        disabled: submitting,
                        oninput: move |e| form.select_month(&e.value()),
                        option { value: "", disabled: true, selected: month.is_none(),
                            "Select a month"
                        }
                        for m in form.months() {
                            option { key: "{m}", value: "{m}", "{m.label()}" }
                        }
                    }
                }

                button {
                    class: "submit-button",
                    disabled: !form.can_submit(),
                    onclick: move |_| form.submit(),
                    if submitting {
                        RefreshCw { size: 16, class: Some("spin".to_string()) }
                        "Fetching forecast..."
                    } else {
                        "View Forecast"
                    }
                }
            }

            if let Some(forecast) = result {
                section { class: "result-panel",
                    h2 { "Forecast" }
                    p { class: "result-row",
                        strong { "Region: " }
                        "{forecast.region}"
                    }
                    p { class: "result-row",
                        strong { "Month: " }
                        "{forecast.month}"
                    }
                    p { class: "result-row",
                        strong { "Projected Condition: " }
                        span {
                            class: if forecast.is_unrest() { "condition risk-high" } else { "condition risk-low" },
                            if forecast.is_unrest() {
                                TriangleAlert { size: 14 }
                            } else {
                                CircleCheck { size: 14 }
                            }
                            "{forecast.condition_label()}"
                        }
                    }
                    p { class: "result-row",
                        strong { "Probability of Unrest: " }
                        span {
                            class: if forecast.high_risk() { "risk-high" } else { "risk-low" },
                            "{forecast.probability_percent()}"
                        }
                    }
                }
            }
        }
    }
}
