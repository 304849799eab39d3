// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rule evaluation

use std::path::PathBuf;
use thiserror::Error;

/// Opaque failure raised by a caller-supplied action.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while evaluating a rule.
///
/// There is no local recovery anywhere in the engine: every failure
/// propagates to the caller unchanged. The perpetual driver is the one
/// place that catches and keeps going.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Filesystem probe failed for a reason other than the path being
    /// absent. Absent paths are not errors; they resolve to the
    /// far-past stamp.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A caller-supplied action failed.
    #[error("action failed: {0}")]
    Action(#[source] BoxError),
}
