//! Mock range data source with simulated network latency.
//!
//! Both operations resolve after a random 300-800 ms delay and occasionally
//! fail, so the pages' error and retry states stay reachable.

use std::{sync::OnceLock, time::Duration};

use rand::Rng;
use thiserror::Error;

/// Failure of a mock fetch operation.
#[derive(Debug, Clone, Error)]
#[error("range service unavailable, try again")]
pub struct FetchError;

/// Bounds of a continuous range.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousBounds {
    pub min: f64,
    pub max: f64,
}

/// Shared runtime for the mock fetches.
pub fn runtime() -> &'static tokio::runtime::Runtime {
    static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime")
    })
}

pub async fn fetch_continuous_bounds() -> Result<ContinuousBounds, FetchError> {
    simulate_network_delay().await?;
    Ok(ContinuousBounds {
        min: 1.0,
        max: 100.0,
    })
}

pub async fn fetch_stop_values() -> Result<Vec<f64>, FetchError> {
    simulate_network_delay().await?;
    Ok(vec![1.99, 5.99, 10.99, 30.99, 50.99, 70.99])
}

async fn simulate_network_delay() -> Result<(), FetchError> {
    let (delay_ms, fail) = {
        let mut rng = rand::rng();
        (rng.random_range(300..800), rng.random_ratio(1, 8))
    };
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    if fail { Err(FetchError) } else { Ok(()) }
}
