// src/core/mod.rs

pub mod html;
#[cfg(feature = "cli")]
pub mod net;
pub mod sanitize;

pub use html::{events, HtmlEvent};
