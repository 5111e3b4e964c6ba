//! The `WebUser` scenario: someone browsing the public leaderboard and stats.
//! No status handling here, goose's default classification applies.

use std::time::Duration;

use goose::{goose::GooseResponse, prelude::*};

use crate::vocabulary::{choose, LEADERBOARD_RANGES};

pub const SCENARIO_NAME: &str = "WebUser";
pub const LEADERBOARD_PATH: &str = "/api/leaderboard";
pub const STATS_PATH: &str = "/api/stats/contribution";
pub const LEADERBOARD_NAME: &str = "view leaderboard";
pub const STATS_NAME: &str = "view stats";
pub const LEADERBOARD_WEIGHT: usize = 2;
pub const STATS_WEIGHT: usize = 1;
/// seconds idled between two page views
pub const WAIT_SECS: (u64, u64) = (2, 5);

pub fn leaderboard_path(range: &str) -> String {
    format!("{LEADERBOARD_PATH}?range={range}")
}

/// GET the leaderboard for `range`, all ranges share one metric name
pub async fn fetch_leaderboard(
    user: &mut GooseUser,
    range: &str,
) -> Result<GooseResponse, Box<TransactionError>> {
    user.get_named(&leaderboard_path(range), LEADERBOARD_NAME)
        .await
}

/// Views the leaderboard over a random range
pub async fn view_leaderboard(user: &mut GooseUser) -> TransactionResult {
    let range = choose(&mut rand::thread_rng(), LEADERBOARD_RANGES);
    let _goose = fetch_leaderboard(user, range).await?;
    Ok(())
}

pub async fn view_stats(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.get_named(STATS_PATH, STATS_NAME).await?;
    Ok(())
}

pub fn web_user() -> Result<Scenario, GooseError> {
    Ok(scenario!(SCENARIO_NAME)
        .set_wait_time(
            Duration::from_secs(WAIT_SECS.0),
            Duration::from_secs(WAIT_SECS.1),
        )?
        .register_transaction(
            transaction!(view_leaderboard)
                .set_name(LEADERBOARD_NAME)
                .set_weight(LEADERBOARD_WEIGHT)?,
        )
        .register_transaction(
            transaction!(view_stats)
                .set_name(STATS_NAME)
                .set_weight(STATS_WEIGHT)?,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_leaderboard_path() {
        assert_eq!(leaderboard_path("30d"), "/api/leaderboard?range=30d");
        for range in LEADERBOARD_RANGES {
            assert!(leaderboard_path(range).ends_with(&format!("range={range}")));
        }
    }

    #[test]
    fn scenario_weights_and_wait() {
        let scenario = web_user().unwrap();
        assert_eq!(scenario.name, SCENARIO_NAME);
        assert_eq!(
            scenario.transaction_wait,
            Some((Duration::from_secs(2), Duration::from_secs(5)))
        );
        let weights: Vec<(&str, usize)> = scenario
            .transactions
            .iter()
            .map(|t| (t.name.as_str(), t.weight))
            .collect();
        assert_eq!(weights, vec![("view leaderboard", 2), ("view stats", 1)]);
        assert!(scenario.transactions.iter().all(|t| !t.on_start));
    }
}
