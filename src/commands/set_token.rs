/// `set-token` command: store a personal token in the system keyring.
use super::Session;
use crate::backers::AppError;
use crate::cli::args::SetTokenArgs;

/// Run `oc-export set-token`.
///
/// # Errors
///
/// See [`store_token`].
pub fn run(args: &SetTokenArgs, session: &mut Session<'_>) -> Result<(), AppError> {
    store_token(args.token.clone(), session)
}

/// Store `token`, or one typed by the user, replacing any existing token
/// only after confirmation.
///
/// # Errors
///
/// `OverwriteDeclined` if the user keeps the existing token, `Configuration`
/// for an empty token or a store that does not return what was written,
/// `Credentials` for keyring failures.
pub fn store_token(token: Option<String>, session: &mut Session<'_>) -> Result<(), AppError> {
    if session.store.get()?.is_some() && !session.prompter.confirm("Overwrite existing token?")? {
        return Err(AppError::OverwriteDeclined {
            target: "the stored token".to_owned(),
        });
    }

    let token = match token {
        Some(t) => t,
        None => session
            .prompter
            .ask("Please enter your Open Collective Personal Token")?,
    };
    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::Configuration {
            reason: "no token was entered".to_owned(),
        });
    }

    session.store.set(token)?;
    if session.store.get()?.as_deref() != Some(token) {
        return Err(AppError::Configuration {
            reason: "the keyring did not return the saved token".to_owned(),
        });
    }
    session.ctx.status("Successfully saved token.");
    Ok(())
}
