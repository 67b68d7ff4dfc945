pub mod config;
pub mod logging;

pub mod checksum;
pub mod classify;
pub mod format;
pub mod state_store;
