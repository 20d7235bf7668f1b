mod error;
mod chunk_status;
mod loading_stats;
mod deployment;
mod config;
pub(crate) mod overlay_message;
