pub mod fallback_store;
pub mod token_store;
