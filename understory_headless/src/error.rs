// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types shared by the widget engines.
//!
//! Engines treat almost every failure as policy (clamp, skip, ignore), so these
//! errors only surface at configuration time or when a caller explicitly asks
//! for a fallible write.

use thiserror::Error;

/// Failure to write through a [`Value`](crate::value::Value).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value is backed by an external getter without a setter.
    #[error("cannot set a read-only external value")]
    ReadOnly,
}

/// Invalid numeric configuration for a ranged widget.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `step` must be strictly positive.
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    /// `min` must not exceed `max`.
    #[error("min ({min}) must not exceed max ({max})")]
    InvertedRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// A bound or step was NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}
