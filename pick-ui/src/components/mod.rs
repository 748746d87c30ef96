//! Reusable Dioxus RSX components.

mod dropdown;

pub use dropdown::Dropdown;
