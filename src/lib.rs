//! Weather Now - current-weather lookup built on tui-dispatch
//!
//! The library exposes the app's modules so the binary and the tests share them.

pub mod action;
pub mod api;
pub mod cities;
pub mod components;
pub mod config;
pub mod effect;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;
