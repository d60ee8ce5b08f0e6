// src/config/consts.rs

// Tag input
pub const MAX_TAG_LENGTH: usize = 6;
pub const MIN_TAG_LENGTH: usize = 1;
pub const NO_CHARACTER_MARKER: &str = "\u{2014}"; // em dash: map grants no character

// Data file
pub const DATA_FILE_NAME: &str = "poedb-map-guild-character-list.csv";
pub const DATA_ENV: &str = "GUILD_TAG_DATA";
pub const CSV_SEP: u8 = b',';

// Scrape
pub const DEFAULT_URL: &str = "https://poedb.tw/us/Maps#MapsItem";
pub const DEFAULT_OUTPUT: &str = DATA_FILE_NAME;
pub const USER_AGENT: &str = "Mozilla/5.0 (GuildTagHelper/1.0)";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const OUTPUT_HEADERS: [&str; 2] = ["Map", "Guild tag character"];

// PoEDB markup
pub const MAP_ANCHOR_CLASSES: [&str; 2] = ["itemclass_map", "Map"];
pub const GUILD_TAG_LABEL: &str = "Guild Tag Editor:";
pub const GUILD_CHAR_CLASS: &str = "colourDefault";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "GUILD_TAG_LOG";

// Window
pub const APP_TITLE: &str = "PoE Guild Tag Map Helper";
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 700.0;
pub const WINDOW_MIN_W: f32 = 800.0;
pub const WINDOW_MIN_H: f32 = 600.0;
