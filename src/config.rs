//! Runtime settings resolved from command-line flags

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_BACKEND_URL;
use crate::forecast::{SamplingStrategy, DEFAULT_STRIDE};
use crate::icons::{DEFAULT_ICON_URL_TEMPLATE, ICON_PLACEHOLDER};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("backend URL must not be empty")]
    EmptyBackendUrl,
    #[error("icon URL template must contain {{icon}}: {0}")]
    IconTemplate(String),
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplingMode {
    /// Every Nth forecast sample (see --stride)
    Stride,
    /// The sample closest to noon for each calendar date
    Midday,
}

/// Flags shared by the binary; flattened into its `Args`
#[derive(clap::Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Base URL of the weather backend
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Icon image URL pattern; `{icon}` is replaced by the icon code
    #[arg(long, default_value = DEFAULT_ICON_URL_TEMPLATE)]
    pub icon_url_template: String,

    /// How forecast samples are reduced to one per day
    #[arg(long, value_enum, default_value = "stride")]
    pub sampling: SamplingMode,

    /// Stride used by `--sampling stride` (minimum 1)
    #[arg(long, default_value_t = DEFAULT_STRIDE as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub stride: u64,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Location to search for on start-up
    #[arg(long)]
    pub location: Option<String>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime settings
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub backend_url: String,
    pub icon_url_template: String,
    pub sampling: SamplingStrategy,
    pub timeout: Option<Duration>,
    pub initial_location: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            icon_url_template: DEFAULT_ICON_URL_TEMPLATE.to_string(),
            sampling: SamplingStrategy::default(),
            timeout: None,
            initial_location: None,
            log_file: None,
        }
    }
}

impl TryFrom<SettingsArgs> for Settings {
    type Error = ConfigError;

    fn try_from(args: SettingsArgs) -> Result<Self, Self::Error> {
        let backend_url = args.backend_url.trim().trim_end_matches('/').to_string();
        if backend_url.is_empty() {
            return Err(ConfigError::EmptyBackendUrl);
        }
        if !args.icon_url_template.contains(ICON_PLACEHOLDER) {
            return Err(ConfigError::IconTemplate(args.icon_url_template));
        }

        let sampling = match args.sampling {
            SamplingMode::Stride => SamplingStrategy::Stride {
                every: usize::try_from(args.stride).unwrap_or(DEFAULT_STRIDE),
            },
            SamplingMode::Midday => SamplingStrategy::Midday,
        };

        Ok(Self {
            backend_url,
            icon_url_template: args.icon_url_template,
            sampling,
            timeout: args.timeout_secs.map(Duration::from_secs),
            initial_location: args.location.filter(|loc| !loc.trim().is_empty()),
            log_file: args.log_file,
        })
    }
}
