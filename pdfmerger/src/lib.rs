//! pdfmerger - Merge per-project PDF pages into one document per project.
//!
//! Files in a flat input directory are grouped into projects by the first
//! `-` separated token of their name. Each project is merged into
//! `<output>/<project>.pdf`. Signature files found anywhere under the
//! output directory are inserted right after the project file whose second
//! name token matches them.
//!
//! The pipeline is made of independent stages:
//!
//! - [`scan`] and [`project`]: walk the input directory and group files
//! - [`signature`]: index signature files of the output tree
//! - [`order`]: base sort and signature splicing
//! - [`orchestrator`]: drive every project through a [`engine::PdfEngine`]
//! - [`validation`]: check merged files
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::Config;
//! use pdfmerger::engine::LopdfEngine;
//! use pdfmerger::orchestrator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new("scans", "merged");
//! let engine = LopdfEngine::from_config(&config);
//!
//! let report = orchestrator::run(&config, &engine).await?;
//! println!("{} merged, {} failed", report.succeeded(), report.failed());
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a merge order
//!
//! ```
//! use pdfmerger::config::SpliceMode;
//! use pdfmerger::order::build_merge_order;
//! use pdfmerger::signature::SignatureIndex;
//! use std::path::PathBuf;
//!
//! let index = SignatureIndex::from_paths(vec![PathBuf::from("out/signature-B.pdf")]);
//! let files = vec![PathBuf::from("in/A-B.pdf")];
//!
//! let order = build_merge_order(&files, &index, SpliceMode::Anchored);
//! assert_eq!(order.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod order;
pub mod output;
pub mod project;
pub mod scan;
pub mod signature;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{MergerError, Result};
pub use orchestrator::{RunReport, run};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
