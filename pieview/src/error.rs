// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the chart, the animation driver and the legend.

use alloc::string::String;

use thiserror::Error;

use crate::animation::ChangeAnimation;

/// Convenience alias for results produced by this crate.
pub type PieResult<T> = Result<T, PieError>;

/// Errors reported by pie chart operations.
///
/// None of these are recoverable data conditions: each one means the caller
/// broke a contract (mismatched lists, unsupported options, unbound legend).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PieError {
    /// A label expected in a reconciled transition was not found.
    #[error("label `{label}` is missing from the reconciled transition")]
    MissingLabel {
        /// The label that failed to resolve.
        label: String,
    },
    /// Start and end data for a transition do not have the same length.
    #[error("transition lists are not aligned: {start} start entries, {end} end entries")]
    LengthMismatch {
        /// Number of start entries.
        start: usize,
        /// Number of end entries.
        end: usize,
    },
    /// The requested change animation has no interpolation strategy.
    #[error("change animation {0:?} is not supported")]
    UnsupportedAnimation(ChangeAnimation),
    /// The legend was used before being bound to a chart.
    #[error("legend is not bound to a chart")]
    Unbound,
}
