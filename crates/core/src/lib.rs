// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rmk-core: lazy, mtime-keyed incremental rebuilds
//!
//! This crate provides:
//! - Freshness stamps with a far-past sentinel for absent files
//! - The [`Rule`] abstraction: an async computation yielding a [`Stamp`]
//! - Composition: the polymorphic [`run`] dispatcher, [`group`],
//!   [`file`] with its staleness decision, and the [`always`] wrapper
//! - A perpetual [`Driver`] with failure backoff
//!
//! Evaluation is deliberately sequential: one prerequisite settles
//! before the next starts, so log ordering is stable and shared build
//! tools are never contended.
//!
//! ```no_run
//! use rmk_core::{file, forever, Dep};
//!
//! # async fn demo() {
//! let css = file(
//!     "site/bundle.css",
//!     vec![Dep::from("styles/main.scss")],
//!     |_target, _prereqs| async move {
//!         // invoke the compiler of your choice here
//!         Ok(())
//!     },
//! );
//! forever(&Dep::rule(css)).await;
//! # }
//! ```

pub mod dep;
pub mod driver;
pub mod error;
pub mod file;
pub mod probe;
pub mod rule;
pub mod stamp;
pub mod timer;

// Re-exports
pub use dep::{group, run, Dep, Group};
pub use driver::{forever, Driver, DEFAULT_INTERVAL, DEFAULT_INTERVAL_ON_ERROR};
pub use error::{BoxError, RuleError};
pub use file::{file, FileRule};
pub use probe::{list_files, FakeProbe, FileProbe, SystemProbe};
pub use rule::{always, rule, Always, FnRule, Rule, RuleInfo};
pub use stamp::{Stamp, FAR_PAST};
pub use timer::{FakeTimer, Timer, TokioTimer};
