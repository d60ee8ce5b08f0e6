// src/gui/components/mod.rs
pub mod character_table;
pub mod results_list;
pub mod tag_input;
