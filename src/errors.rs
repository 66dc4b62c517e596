// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

/// The error type for this crate.
///
/// `CoverageInconsistent` (self-healing coverage-map bookkeeping) is deliberately not a variant
/// here -- it is surfaced as a `log::warn!` at the call site, never returned to a caller.
#[derive(Debug)]
pub enum Error {
    /// A candidate edge referred to a vertex that isn't part of the graph, or the conjugate
    /// involution was violated (`conjugate(conjugate(e)) != e`, or `e == conjugate(e)` where the
    /// caller assumed otherwise).
    GraphInconsistent { message: String },
    /// A configuration value was rejected before any growth happened.
    ConfigInvalid { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::GraphInconsistent { message } => {
                write!(f, "graph is inconsistent: {}", message)
            }
            Error::ConfigInvalid { message } => write!(f, "invalid configuration: {}", message),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
