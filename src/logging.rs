//! Tracing subscriber setup.
//!
//! Filter priority, highest first: `SENTINEL_LOG`, `RUST_LOG`, the CLI
//! verbosity flags, then `warn`.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "SENTINEL_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// `--verbose` wins when both flags are given.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber. Call once, before config loading.
pub fn init_subscriber(verbosity: Verbosity, no_color: bool) {
    let filter = build_env_filter(
        verbosity,
        std::env::var(LOG_ENV).ok().as_deref(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
    );

    let use_ansi = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true);

    if verbosity == Verbosity::Verbose {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_timer(fmt::time::uptime()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.without_time().compact())
            .init();
    }
}

/// Unparseable directives fall through to the next source.
fn build_env_filter(
    verbosity: Verbosity,
    app_directives: Option<&str>,
    rust_log: Option<&str>,
) -> EnvFilter {
    for directives in [app_directives, rust_log].into_iter().flatten() {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
    }

    let level = verbosity.default_level();
    let directives = if verbosity == Verbosity::Verbose {
        format!("{level},sentinel_console=debug,eframe=info,egui=warn,wgpu=warn")
    } else {
        level.to_string()
    };
    EnvFilter::new(directives.to_lowercase())
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn levels_follow_verbosity() {
        assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.default_level(), Level::DEBUG);
    }

    #[test]
    fn app_env_beats_rust_log() {
        let filter = build_env_filter(Verbosity::Normal, Some("trace"), Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn bad_directives_fall_through() {
        let filter = build_env_filter(
            Verbosity::Normal,
            Some("sentinel_console=loud"),
            Some("info"),
        );
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = build_env_filter(Verbosity::Quiet, None, None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
