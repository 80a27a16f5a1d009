// src/lib.rs

pub mod app;
pub mod chat_message;
pub mod chat_view;
pub mod config;
pub mod constants;
pub mod errors;
pub mod exchange;
pub mod key_handlers;
pub mod locale;
pub mod logging;
pub mod translit;
