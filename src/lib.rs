// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod scrape;
pub mod tags;
