// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! PDB molecular structure import into instanced ball-and-stick geometry.
//!
//! The crate reads atoms (`ATOM`/`HETATM`/`TER`) and bonds (`CONECT`) from
//! PDB files, resolves elements against an immutable periodic-table
//! registry, and describes the resulting scene to a host engine through the
//! [`sink::SceneSink`] trait.
//!
//! # Key entry points
//!
//! - [`importer::Importer`] - runs one import and returns an
//!   [`importer::ImportReport`]
//! - [`elements::ElementTable`] - element registry, built-in or customised
//! - [`pdb::PdbStructure`] - parsed atoms and sticks
//! - [`options::ImportOptions`] - import configuration (TOML presets)
//! - [`sink::RecordingSink`] - in-memory sink for headless use
//!
//! # Pipeline
//!
//! Parsing is a single streaming pass per record type. Atoms are grouped per
//! element; every group becomes a point mesh with one ball instanced on its
//! vertices. Bonds are drawn as segmented cylinders, a skinned skeleton, or
//! explicit cylinders, see [`geometry::sticks`].

pub mod elements;
pub mod error;
pub mod geometry;
pub mod importer;
pub mod options;
pub mod pdb;
pub mod sink;
