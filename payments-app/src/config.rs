//! Configuration loading from flags and environment.

use clap::{Parser, ValueEnum};

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration.
#[derive(Debug, Parser)]
#[command(name = "payments-server", version, about = "Payments resource API server")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "PAYMENTS_ADDR", default_value = "0.0.0.0:8000")]
    pub addr: String,

    /// Database connection URL (postgres:// or sqlite:)
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://postgres@localhost:5432"
    )]
    pub database_url: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Strips the password from a connection URL before it is logged.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((userinfo, host)) = rest.split_once('@') else {
        return url.to_string();
    };
    match userinfo.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["payments-server"]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8000");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "payments-server",
            "--addr",
            "127.0.0.1:9000",
            "--database-url",
            "sqlite::memory:",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result = Config::try_parse_from(["payments-server", "--log-format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_redact_url() {
        assert_eq!(
            redact_url("postgres://app:secret@db:5432/payments"),
            "postgres://app:***@db:5432/payments"
        );
        assert_eq!(
            redact_url("postgres://postgres@localhost:5432"),
            "postgres://postgres@localhost:5432"
        );
        assert_eq!(redact_url("sqlite::memory:"), "sqlite::memory:");
    }
}
