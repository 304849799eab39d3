// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer abstraction for testable scheduling

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The timer the driver sleeps on between ticks.
#[async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real timer backed by the tokio runtime.
#[derive(Clone, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fake timer for testing: records every requested sleep and returns
/// without waiting.
#[derive(Clone, Default)]
pub struct FakeTimer {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl FakeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in order.
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Timer for FakeTimer {
    async fn sleep(&self, duration: Duration) {
        self.slept
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(duration);
        // Still a suspension point: a perpetual loop driven by this
        // timer must stay observable and abortable from the outside.
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
