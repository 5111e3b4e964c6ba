//! Stress test of the DevMeter dashboard and heartbeat API.
//!
//! ```bash
//! cargo run --release -- --host http://localhost:3000 -u 200 -r 10 -t 10m
//! ```

use devmeter_stress::{
    config::{DEFAULT_HOST, DEFAULT_USERS},
    extension::{extension_user, ExtensionSession},
    web::web_user,
};
use goose::prelude::*;

#[tokio::main]
/// Initialize and starts a GooseAttack
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .set_default(GooseDefault::Host, DEFAULT_HOST)?
        .set_default(GooseDefault::Users, DEFAULT_USERS)?
        .register_scenario(extension_user(ExtensionSession::default())?)
        .register_scenario(web_user()?)
        .execute()
        .await?;

    Ok(())
}
