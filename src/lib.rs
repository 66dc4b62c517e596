// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Path-extension core for a de Bruijn graph genome assembler.
//!
//! This crate turns a set of seed [`path::Path`]s into a covering set of extended,
//! deduplicated, length-filtered paths by repeatedly choosing a next edge
//! ([`extension_chooser::ExtensionChooser`]), watching for cyclic repeats
//! ([`loop_detector::LoopDetector`]), resolving short loops
//! ([`short_loop_resolver::ShortLoopResolver`]), and bridging coverage gaps with paired-read
//! evidence ([`path_extend::ScaffoldingPathExtender`]). [`covering_driver::CoveringDriver`] is the
//! top-level entry point.
//!
//! Graph construction, k-mer hashing, paired-read ingestion, and on-disk formats are all external
//! to this crate: implement [`graph::AssemblyGraph`] over whatever graph representation you
//! already have. [`graph::simple::SimpleAssemblyGraph`] is a small in-memory implementation
//! shipped for tests and the demo runner.

pub mod config;
pub mod coverage_map;
pub mod covering_driver;
pub mod errors;
pub mod extension_chooser;
pub mod graph;
pub mod loop_detector;
pub mod path;
pub mod path_extend;
pub mod short_loop_resolver;

pub use config::{Config, LibraryOrientation, PairedLibrary};
pub use coverage_map::CoverageMap;
pub use covering_driver::{CoveringDriver, CoveringResult, Seed};
pub use errors::{Error, Result};
pub use graph::{AssemblyGraph, EdgeWithDistance};
pub use loop_detector::LoopDetector;
pub use path::{CoverageSink, NullSink, Path, PathId, PathStore};
