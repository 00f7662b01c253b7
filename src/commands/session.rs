//! Session command handlers.

use crate::error::{LearnboardError, Result};
use crate::output::{print_info, print_session, print_success};
use crate::session::SessionStore;

const WELCOME: &str = "Welcome to learnboard. Pick a stack per project with \
`learnboard select`; `learnboard progress <snapshot>` shows how far you got.";

/// Show the current session.
pub fn session_command(store: &SessionStore) -> Result<()> {
    let session = store.init_on_load()?;
    print_session(&session);
    Ok(())
}

/// Record `user_id` as the signed-in user.
pub fn login_command(store: &SessionStore, user_id: &str) -> Result<()> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(LearnboardError::Session(
            "user id must not be empty".to_string(),
        ));
    }
    store.update(|s| s.user_id = Some(user_id.to_string()))?;
    print_success(&format!("Signed in as {}", user_id));
    Ok(())
}

/// Clear the session, including pinned variants.
pub fn logout_command(store: &SessionStore) -> Result<()> {
    let session = store.init_on_load()?;
    store.clear_on_logout()?;
    if session.is_signed_in() {
        print_success("Logged out; local session cleared");
    } else {
        print_success("Local session cleared");
    }
    Ok(())
}

/// Print the welcome notice the first time it is called for a session.
///
/// Returns whether the notice was shown.
pub fn welcome_once(store: &SessionStore) -> Result<bool> {
    if store.init_on_load()?.seen_welcome {
        return Ok(false);
    }
    print_info(WELCOME);
    store.update(|s| s.seen_welcome = true)?;
    Ok(true)
}
