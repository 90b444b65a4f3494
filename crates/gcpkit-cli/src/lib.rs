//! # gcpkit-cli
//!
//! Thin orchestration over the GCP selection pipeline: reads a surveyed
//! area's boundary from a KMZ archive, obtains per-vertex elevations from a
//! provider, and runs the core selection, producing a [`GcpReport`].
//!
//! Missing source documents and empty boundaries become soft error reports;
//! everything else (unreadable archives, malformed markup, elevation fetch
//! failures, degenerate geometry) propagates as [`ProcessError`].
//!
//! [`GcpReport`]: gcpkit_core::GcpReport

mod process;

pub use process::{process_kmz, ProcessError};
