//! Shared Dioxus components for the pick apps.
//!
//! This crate provides:
//! - `state`: the open/closed interaction state behind the dropdown selector
//! - `dom`: document-level pointer-press plumbing with scoped deregistration
//! - `components`: reusable RSX components

pub mod components;
pub mod dom;
pub mod state;
