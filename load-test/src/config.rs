//! Defaults applied on top of the goose command line, and the credential
//! used by the extension users.

/// dashboard dev server, override with `--host`
pub const DEFAULT_HOST: &str = "http://localhost:3000";
/// override with `--users`
pub const DEFAULT_USERS: usize = 100;

/// Non-functional key sent by every extension user. The server answers 401 to
/// it, which the heartbeat transaction still counts as a success.
pub const PLACEHOLDER_API_KEY: &str = "STRESS_TEST_KEY_PLACEHOLDER";
