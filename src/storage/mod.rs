//! Durable client storage (the terminal counterpart of browser local storage).

pub mod token_store;

pub use token_store::{TOKEN_KEY, TokenStore};
