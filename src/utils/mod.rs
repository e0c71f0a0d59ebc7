pub mod browser;
pub mod client;
pub mod env;
pub mod session;

/// the Injectionator service n8r talks to unless `$N8R_BASE_URL` says otherwise
pub const DEFAULT_BASE_URL: &str = "https://injectionator.com";
