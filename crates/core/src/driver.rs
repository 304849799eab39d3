// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Perpetual evaluation driver with failure backoff

use crate::dep::{run, Dep};
use crate::timer::{Timer, TokioTimer};
use std::convert::Infallible;
use std::time::Duration;

/// Default delay between successful ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);
/// Default delay before the next tick after a failed one.
pub const DEFAULT_INTERVAL_ON_ERROR: Duration = Duration::from_secs(5);

/// Re-evaluates a root dependency on a timer, forever.
///
/// Each tick fully settles (resolves or fails) before the next timer is
/// armed, so ticks never overlap. A failed tick is reported and backed
/// off with the longer interval, never fatal: this loop is the single
/// place in the engine that contains failures instead of propagating
/// them.
pub struct Driver<T: Timer = TokioTimer> {
    interval: Duration,
    interval_on_error: Duration,
    timer: T,
}

impl Driver<TokioTimer> {
    pub fn new() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            interval_on_error: DEFAULT_INTERVAL_ON_ERROR,
            timer: TokioTimer,
        }
    }
}

impl Default for Driver<TokioTimer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Timer> Driver<T> {
    /// Delay between successful ticks.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Delay before the next tick after a failed one.
    pub fn interval_on_error(mut self, interval: Duration) -> Self {
        self.interval_on_error = interval;
        self
    }

    /// Swap the timer implementation.
    pub fn with_timer<U: Timer>(self, timer: U) -> Driver<U> {
        Driver {
            interval: self.interval,
            interval_on_error: self.interval_on_error,
            timer,
        }
    }

    /// Evaluate `dep`, sleep, repeat. Never returns.
    pub async fn run_forever(&self, dep: &Dep) -> Infallible {
        loop {
            match run(dep).await {
                Ok(stamp) => {
                    tracing::debug!(?stamp, "tick complete");
                    self.timer.sleep(self.interval).await;
                }
                Err(err) => {
                    tracing::error!(error = %err, "tick failed");
                    self.timer.sleep(self.interval_on_error).await;
                }
            }
        }
    }
}

/// Drive `dep` forever with the default intervals.
pub async fn forever(dep: &Dep) -> Infallible {
    Driver::new().run_forever(dep).await
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
