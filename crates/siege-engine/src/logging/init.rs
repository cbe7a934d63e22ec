use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "siege_engine=debug", "siege_engine::anim=trace").
///
/// When `env_filter` is `None`, `RUST_LOG` is consulted, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string that will be handed to `env_logger`.
    ///
    /// Returns `None` when the default level applies.
    pub fn resolve_filter(&self, rust_log: Option<String>) -> Option<String> {
        self.env_filter
            .clone()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. Uses `try_init` so a host that already
/// installed a logger keeps it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter(std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            log::debug!("logger already installed; keeping host logger");
            return;
        }

        log::debug!("logging initialized");
    });
}
