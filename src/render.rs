//! Rendering subsystem.
//!
//! Everything that writes to the terminal lives under `render::ui`; the session
//! loop only sees the [`Renderer`](ui::Renderer) trait.

pub mod ui;
