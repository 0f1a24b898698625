//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for ranked listings. Clamped with `clamp_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
