pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod kana;
pub mod lookup;
pub mod pokemon;
pub mod types;
