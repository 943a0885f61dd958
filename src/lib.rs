//! Floating-window compositor for character-cell terminal surfaces.
//!
//! A [`window::WindowManager`] owns a z-ordered stack of
//! [`window::Window`]s, each wrapping a [`components::Component`]. The
//! manager lays windows out, composites them back to front, and routes
//! mouse and keyboard input with raise-on-press and border drag/resize.

pub mod components;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod layout;
pub mod region;
pub mod runner;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
