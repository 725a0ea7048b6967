pub mod config;
pub mod http;
pub mod model;
pub mod moderation;
pub mod orchestrator;
pub mod repl;
pub mod types;
