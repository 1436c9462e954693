//! Shared Dioxus components and browser bridge for the temperature heat map.
//!
//! This crate provides:
//! - `js_bridge`: fetching the dataset through the browser's `fetch`
//! - `state`: reactive AppState with Dioxus Signals
//! - `handlers`: hover handlers keyed by cell index
//! - `components`: RSX components for headings, axes, grid, legend and tooltip

pub mod components;
pub mod handlers;
pub mod js_bridge;
pub mod state;
