//! CLI command handlers

pub mod ask;
pub mod config;
pub mod forecast;
pub mod plan;
pub mod route;
pub mod supplier;

use freshcast_core::MAX_HORIZON_DAYS;
use freshcast_core::{FreshCastError, Orchestrator};

/// Requested horizon, or the configured default, checked against the
/// supported range
pub fn horizon(days: Option<u32>, orchestrator: &Orchestrator) -> freshcast_core::Result<u32> {
    let days = days.unwrap_or_else(|| orchestrator.default_horizon());
    if days == 0 || days > MAX_HORIZON_DAYS {
        return Err(FreshCastError::InvalidInput(format!(
            "--days must be between 1 and {}, got {}",
            MAX_HORIZON_DAYS, days
        )));
    }
    Ok(days)
}
