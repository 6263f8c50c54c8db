/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod export;
pub mod list_backers;
pub mod list_tiers;
pub mod set_token;

use crate::api::Client;
use crate::backers::AppError;
use crate::cli::args::Command;
use crate::cli::{OutputCtx, Prompter, TerminalPrompter};
use crate::config::Config;
use crate::credentials::{KeyringStore, TokenStore};

/// Everything a command handler needs for one invocation.
pub struct Session<'a> {
    pub config: &'a Config,
    pub ctx: &'a OutputCtx,
    pub store: &'a dyn TokenStore,
    pub prompter: &'a mut dyn Prompter,
}

impl Session<'_> {
    /// Find a personal token: `--api-token`/env first, then the keyring, then
    /// ask the user to store one.
    ///
    /// # Errors
    ///
    /// `AppError::Configuration` when no token could be obtained, or the
    /// keyring/prompt error that prevented it.
    pub fn token(&mut self) -> Result<String, AppError> {
        if let Some(token) = &self.config.env_token {
            tracing::debug!("using token from command line or environment");
            return Ok(token.clone());
        }
        if let Some(token) = self.store.get()? {
            return Ok(token);
        }

        self.ctx
            .warn("Token not found in the system keyring. Please add one now.");
        set_token::store_token(None, self)?;
        self.store.get()?.ok_or_else(|| AppError::Configuration {
            reason: "the keyring has no token after saving one".to_owned(),
        })
    }

    /// Build an API client authenticated with [`Session::token`].
    ///
    /// # Errors
    ///
    /// Token lookup errors, or `ApiError` from client construction.
    pub fn connect(&mut self) -> Result<Client, AppError> {
        let token = self.token()?;
        let client = Client::construct(Some(token.as_str()), &self.config.endpoint)?;
        tracing::debug!(endpoint = client.endpoint(), "client ready");
        Ok(client)
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `AppError` on any command failure.
pub fn dispatch(command: &Command, config: &Config, ctx: &OutputCtx) -> Result<(), AppError> {
    let store = KeyringStore::open()?;
    let mut prompter = TerminalPrompter;
    let mut session = Session {
        config,
        ctx,
        store: &store,
        prompter: &mut prompter,
    };

    match command {
        Command::ListBackers(args) => list_backers::run(args, &mut session),
        Command::ListTiers(args) => list_tiers::run(args, &mut session),
        Command::Export(args) => export::run(args, &mut session),
        Command::SetToken(args) => set_token::run(args, &mut session),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::api::DEFAULT_ENDPOINT;
    use crate::cli::OutputCtx;
    use crate::cli::args::OutputFormat;
    use crate::config::Config;

    pub fn config(env_token: Option<&str>) -> Config {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            env_token: env_token.map(str::to_owned),
            debug: false,
        }
    }

    pub fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Plain, false, true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{config, ctx};
    use super::*;
    use crate::cli::prompt::testing::ScriptedPrompter;
    use crate::credentials::testing::MemoryStore;

    #[test]
    fn test_env_token_wins_over_keyring() {
        let config = config(Some("from-env"));
        let ctx = ctx();
        let store = MemoryStore::with_token("from-keyring");
        let mut prompter = ScriptedPrompter::default();
        let mut session = Session {
            config: &config,
            ctx: &ctx,
            store: &store,
            prompter: &mut prompter,
        };
        assert_eq!(session.token().unwrap(), "from-env");
    }

    #[test]
    fn test_keyring_token() {
        let config = config(None);
        let ctx = ctx();
        let store = MemoryStore::with_token("from-keyring");
        let mut prompter = ScriptedPrompter::default();
        let mut session = Session {
            config: &config,
            ctx: &ctx,
            store: &store,
            prompter: &mut prompter,
        };
        assert_eq!(session.token().unwrap(), "from-keyring");
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_missing_token_prompts_and_saves() {
        let config = config(None);
        let ctx = ctx();
        let store = MemoryStore::default();
        let mut prompter = ScriptedPrompter::new(&["typed-token"]);
        let mut session = Session {
            config: &config,
            ctx: &ctx,
            store: &store,
            prompter: &mut prompter,
        };
        assert_eq!(session.token().unwrap(), "typed-token");
        assert_eq!(store.token.borrow().as_deref(), Some("typed-token"));
    }

    #[test]
    fn test_no_token_entered_is_configuration_error() {
        let config = config(None);
        let ctx = ctx();
        let store = MemoryStore::default();
        let mut prompter = ScriptedPrompter::new(&[""]);
        let mut session = Session {
            config: &config,
            ctx: &ctx,
            store: &store,
            prompter: &mut prompter,
        };
        let err = session.connect().unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
