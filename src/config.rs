/// Colour policy for diagnostics on stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogStyle {
    Auto,
    Always,
    Never,
}

impl LogStyle {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "auto" => LogStyle::Auto,
            "always" => LogStyle::Always,
            _ => LogStyle::Never,
        }
    }

    /// Value understood by `env_logger`'s write-style parser.
    pub fn label(&self) -> &'static str {
        match self {
            LogStyle::Auto => "auto",
            LogStyle::Always => "always",
            LogStyle::Never => "never",
        }
    }
}

/// Configuration loaded from environment variables.
///
/// Only diagnostics are configurable; nothing here changes a computed word.
#[derive(Clone, Debug)]
pub struct Config {
    /// `env_logger` filter directives, e.g. `debug` or `gauss_ffi::abi=trace`.
    pub log_filter: String,
    pub log_style: LogStyle,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        Self {
            log_filter: std::env::var("GAUSS_FFI_LOG").unwrap_or(defaults.log_filter),
            log_style: std::env::var("GAUSS_FFI_LOG_STYLE")
                .map(|s| LogStyle::from_str(&s))
                .unwrap_or(defaults.log_style),
        }
    }

    /// Install the global logger. Output goes to stderr so stdout carries only the word.
    pub fn init_logging(&self) {
        let _ = env_logger::Builder::new()
            .parse_filters(&self.log_filter)
            .parse_write_style(self.log_style.label())
            .target(env_logger::Target::Stderr)
            .try_init();
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".into(),
            log_style: LogStyle::Never,
        }
    }
}
