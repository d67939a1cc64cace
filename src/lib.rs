#![forbid(unsafe_code)]

pub mod app;
pub mod appender;
pub mod config;
pub mod error;
pub mod formats;
pub mod logger;
pub mod plugin;
pub mod runtime;

pub use config::Config;
pub use formats::*;
pub use logger::*;
pub use runtime::*;
