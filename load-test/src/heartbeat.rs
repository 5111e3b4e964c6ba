//! Heartbeat payload, as the IDE extension posts it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::vocabulary::{choose, FILES, LANGUAGES, PROJECTS};

/// the only heartbeat kind the extension emits
pub const FILE_KIND: &str = "file";

/// One activity event. Built fresh for every request and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heartbeat {
    pub project: String,
    pub language: String,
    pub file: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_save: bool,
    /// milliseconds since the unix epoch
    pub timestamp: i64,
}

impl Heartbeat {
    /// Builds a heartbeat from independent draws over the fixed vocabularies
    pub fn random<R: Rng + ?Sized>(rng: &mut R, timestamp: i64) -> Self {
        Heartbeat {
            project: choose(rng, PROJECTS).to_string(),
            language: choose(rng, LANGUAGES).to_string(),
            file: choose(rng, FILES).to_string(),
            kind: FILE_KIND.to_string(),
            is_save: rng.gen_bool(0.5),
            timestamp,
        }
    }
}

/// current wall clock, in milliseconds since the unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
