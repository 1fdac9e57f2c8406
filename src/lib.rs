//! CyberSentinel: a desktop security-operations console over static alert,
//! incident, threat-intelligence, and report data.

pub mod app;
pub mod config;
pub mod filter;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod ui;
pub mod util;

pub use app::SentinelApp;
