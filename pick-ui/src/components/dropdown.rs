//! Custom dropdown selector.

use crate::dom::OutsidePress;
use crate::state::SelectState;
use dioxus::prelude::*;
use std::rc::Rc;

/// Props for Dropdown
#[derive(Props, Clone, PartialEq)]
pub struct DropdownProps {
    /// DOM id for the widget root; scopes outside-press detection
    pub id: String,
    /// Selectable values, rendered in the given order
    pub options: Vec<String>,
    /// Externally-controlled selection; drives the label and the marked entry
    #[props(default)]
    pub selected_value: Option<String>,
    /// Label shown while nothing is selected
    #[props(default = "Select...".to_string())]
    pub placeholder: String,
    /// Called with the chosen value, once per selection
    pub on_select: EventHandler<String>,
}

/// A styled replacement for a native `<select>`: a clickable trigger showing
/// the current value and, while open, a list of options. A press anywhere
/// outside the widget closes the list without selecting.
#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let mut state = use_signal(SelectState::new);

    // The document listener lives exactly as long as this component
    // instance; the guard's Drop removes it on unmount.
    use_hook(|| {
        let root_id = props.id.clone();
        let pressed_id = root_id.clone();
        let guard = OutsidePress::register(&root_id, move || {
            if state.peek().is_open {
                log::debug!("press outside #{pressed_id} - closing");
                state.write().close();
            }
        });
        if guard.is_none() {
            log::warn!("no document to observe; #{root_id} keeps its list open until toggled");
        }
        Rc::new(guard)
    });

    let open = state.read().is_open;
    let label = state
        .read()
        .display_text(props.selected_value.as_deref(), &props.placeholder)
        .to_string();
    let arrow = if open { "▲" } else { "▼" };

    let selected_value = props.selected_value.clone();
    let on_select = props.on_select;

    rsx! {
        div {
            id: "{props.id}",
            class: "dropdown",
            style: "position: relative; display: inline-block; min-width: 180px;",

            div {
                class: "dropdown-trigger",
                style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; background: #fff; cursor: pointer; user-select: none;",
                onclick: move |_| {
                    log::debug!("trigger clicked; open={}", !state.peek().is_open);
                    state.write().toggle();
                },
                span { "{label}" }
                span {
                    style: "margin-left: 8px; font-size: 10px; color: #666;",
                    "{arrow}"
                }
            }

            if open {
                ul {
                    class: "dropdown-options",
                    style: "position: absolute; top: 100%; left: 0; right: 0; margin: 4px 0 0 0; padding: 0; list-style: none; border: 1px solid #ddd; border-radius: 4px; background: #fff; max-height: 240px; overflow-y: auto; z-index: 10;",
                    for value in props.options.iter() {
                        li {
                            class: "dropdown-option",
                            style: if Some(value) == selected_value.as_ref() {
                                "padding: 8px 12px; cursor: pointer; background: #E3F2FD; font-weight: bold;"
                            } else {
                                "padding: 8px 12px; cursor: pointer;"
                            },
                            onclick: {
                                let value = value.clone();
                                move |_| {
                                    log::debug!("option picked: {value}");
                                    state.write().select(value.clone());
                                    on_select.call(value.clone());
                                }
                            },
                            "{value}"
                        }
                    }
                }
            }
        }
    }
}
