// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Paths: ordered edge sequences with gap annotations, and the arena that owns them.

mod path;
mod store;

pub use path::{CoverageSink, NullSink, Path};
pub use store::{PathId, PathStore};
