use std::path::PathBuf;

use thiserror::Error;

/// Failure of a whole sampling pass. Nothing is rendered when this happens.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Error while reading all the processes: {0}")]
    ProviderUnavailable(String),
}

/// Failure of a terminate-by-name request. Recoverable: the table stays up.
#[derive(Debug, Error)]
pub enum TerminateError {
    #[error("no process matches \"{0}\"")]
    NoMatch(String),

    #[error("permission denied while signalling \"{0}\"")]
    PermissionDenied(String),

    #[error("failed to signal \"{name}\": {source}")]
    Signal {
        name: String,
        #[source]
        source: nix::Error,
    },

    #[error("failed to scan processes for \"{name}\": {reason}")]
    Scan { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}
