//! Demo page for the `pick-ui` dropdown selector.
//!
//! Mounts two independent dropdowns, each wired to its own signal and
//! reflecting selections back through `on_select`, with the current picks
//! echoed below the widgets.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use pick_ui::components::Dropdown;

const ROASTS: [&str; 4] = ["Light", "Medium", "Medium-Dark", "Dark"];
const BREW_METHODS: [&str; 5] = [
    "Pour Over",
    "French Press",
    "Espresso",
    "Aeropress",
    "Cold Brew",
];

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting pick demo");
    launch(App);
}

#[component]
fn App() -> Element {
    let mut roast = use_signal(|| None::<String>);
    let mut brew = use_signal(|| None::<String>);

    rsx! {
        div {
            style: "max-width: 640px; margin: 0 auto; padding: 20px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "color: #2c3e50; margin-bottom: 4px;",
                "Coffee order"
            }
            p {
                style: "color: #666; margin-bottom: 20px;",
                "Pick a roast and a brew method."
            }

            div {
                style: "display: flex; gap: 16px; align-items: flex-start;",

                Dropdown {
                    id: "roast-pick".to_string(),
                    options: ROASTS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    selected_value: roast(),
                    placeholder: "Pick a roast".to_string(),
                    on_select: move |value: String| {
                        info!("roast selected: {value}");
                        roast.set(Some(value));
                    },
                }

                Dropdown {
                    id: "brew-pick".to_string(),
                    options: BREW_METHODS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    selected_value: brew(),
                    placeholder: "Pick a brew method".to_string(),
                    on_select: move |value: String| {
                        info!("brew method selected: {value}");
                        brew.set(Some(value));
                    },
                }
            }

            div {
                style: "margin-top: 24px; color: #2c3e50;",
                if let Some(r) = roast() {
                    p { "Roast: {r}" }
                }
                if let Some(b) = brew() {
                    p { "Brew method: {b}" }
                }
            }
        }
    }
}
