// src/tags/mod.rs
//
// Guild tag → map resolution. The index is built once from the data file and
// never mutated; everything else here is a pure function over it.

mod index;
mod load;
mod order;
mod resolve;
mod tag;

pub use index::{build_index, build_index_with_report, CharacterMapIndex, LoadReport};
pub use load::{load_index, load_index_from_str, parse_rows};
pub use order::sort_characters;
pub use resolve::{resolve_char, resolve_tag, status_message, LookupResult, Resolution, TagLookup};
pub use tag::GuildTag;
