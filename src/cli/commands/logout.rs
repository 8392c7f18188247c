use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::TokenStore;
use crate::ui::messages::info;

/// Handle the `logout` command: forget the token and go back to login.
pub fn handle(cfg: &Config) -> AppResult<()> {
    TokenStore::new(&cfg.storage_file).clear()?;
    info("Logged out. Run `rtimetracker login` to sign in again.");
    Ok(())
}
