// src/config/options.rs
use std::ffi::OsString;
use std::path::PathBuf;

use super::consts::*;
use super::paths;

/// Where the scraper reads its HTML from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HtmlSource {
    Url(String),
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: HtmlSource,
    pub output: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            source: HtmlSource::Url(s!(DEFAULT_URL)),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GuiOptions {
    pub data_file: PathBuf,
    pub window_w: f32,
    pub window_h: f32,
    pub min_w: f32,
    pub min_h: f32,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            data_file: paths::data_file(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            min_w: WINDOW_MIN_W,
            min_h: WINDOW_MIN_H,
        }
    }
}

impl GuiOptions {
    /// Defaults, with the data file replaced by `arg` when one was given.
    pub fn from_arg(arg: Option<OsString>) -> Self {
        let mut opts = Self::default();
        if let Some(p) = arg.filter(|a| !a.is_empty()) {
            opts.data_file = PathBuf::from(p);
        }
        opts
    }
}
