//! Dioxus screens and components for Rainfo.
//!
//! This crate provides:
//! - `state`: the shared `AppState` context wrapping one `Session`
//! - `screens`: one view per `Screen`, selected by `ScreenView`
//! - `components`: reusable RSX components (location input, drop-down, map, ...)
//! - `js_bridge`: the timer that keeps the drought map scrolled past its header

pub mod components;
pub mod js_bridge;
pub mod screens;
pub mod state;
pub mod style;
