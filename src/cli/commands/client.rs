use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use clap::{Arg, ArgMatches, Command};
use std::{path::PathBuf, time::Duration};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_FILE: &str = "session-file";
pub const ARG_TIMEOUT: &str = "timeout";

#[derive(Debug, Clone)]
pub struct Options {
    pub api_url: String,
    pub session_file: Option<PathBuf>,
    pub timeout: Duration,
}

impl Options {
    /// Parse the API connection arguments, falling back to defaults for blank values.
    ///
    /// # Errors
    /// Returns an error if the timeout is zero.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let api_url = matches
            .get_one::<String>(ARG_API_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let session_file = matches
            .get_one::<String>(ARG_SESSION_FILE)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let timeout = matches
            .get_one::<u64>(ARG_TIMEOUT)
            .copied()
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
        if timeout.is_zero() {
            anyhow::bail!("--{ARG_TIMEOUT} must be at least 1 second");
        }

        Ok(Self {
            api_url,
            session_file,
            timeout,
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Storefront API base URL")
                .env("STOREFRONT_API_URL")
                .global(true)
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long(ARG_SESSION_FILE)
                .help("File holding the session token (default: $HOME/.storefront/token)")
                .env("STOREFRONT_SESSION_FILE")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("STOREFRONT_TIMEOUT")
                .global(true)
                .default_value("10")
                .value_parser(clap::value_parser!(u64)),
        )
}
