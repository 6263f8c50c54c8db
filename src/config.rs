/// Per-invocation configuration, built once in `main` and passed to handlers.

use crate::cli::Cli;

/// Settings that shape how a command talks to Open Collective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Token from `--api-token` / `OPENCOLLECTIVE_TOKEN`; wins over the keyring.
    pub env_token: Option<String>,
    /// Report full error chains and per-backer records.
    pub debug: bool,
}

impl Config {
    /// Construct from parsed CLI arguments (environment already folded in by clap).
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            endpoint: cli.endpoint.clone(),
            env_token: cli.api_token.clone().filter(|t| !t.trim().is_empty()),
            debug: cli.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "oc-export",
            "--debug",
            "--endpoint",
            "http://localhost:3000/graphql",
            "--api-token",
            "  ",
            "list-tiers",
            "getsolus",
        ])
        .unwrap();
        let config = Config::from_cli(&cli);
        assert!(config.debug);
        assert_eq!(config.endpoint, "http://localhost:3000/graphql");
        assert_eq!(config.env_token, None);
    }

    #[test]
    fn test_api_token_flag() {
        let cli =
            Cli::try_parse_from(["oc-export", "--api-token", "abc", "list-tiers", "getsolus"])
                .unwrap();
        assert_eq!(Config::from_cli(&cli).env_token.as_deref(), Some("abc"));
    }
}
