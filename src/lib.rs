pub mod commands;
pub mod http;
pub mod provider;
pub mod render;
pub mod runtime;
pub mod stats;
