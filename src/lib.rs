pub mod config;
pub use config::{Settings, APP_NAME};

pub mod midi;

pub mod ui;

pub mod yarns;
