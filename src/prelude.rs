//! The `llmstxt` prelude for convenient library usage.
//!
//! Re-exports the types and functions most programs need, so a single glob
//! import is enough to configure and run the pipeline.
//!
//! # Example
//!
//! ```
//! use llmstxt::prelude::*;
//! # fn main() -> Result<()> {
//! let docs = tempfile::tempdir().unwrap();
//! std::fs::write(docs.path().join("README.md"), "# Hello\n").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .local(docs.path().to_str().unwrap())
//!     .analyze(true)
//!     .build()?;
//! let mut report = Vec::new();
//! let mut answers: &[u8] = b"";
//! let outcome = execute(&config, &CancellationToken::new(), &NoOpProgress, &mut report, &mut answers)?;
//! assert!(matches!(outcome, RunOutcome::Analyzed(DocStats { file_count: 1, .. })));
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder, Mode, OutputFormat, SourceSpec, TraversalConfig};
pub use crate::core_types::{DocStats, MatchedFile};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{passes_extension_filters, passes_size_filter};
pub use crate::processing::{compute_stats, count_words, read_contents};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::source::{locate, parse_remote, Host, RemoteRepo, ResolvedSource};
pub use crate::{discover_files, execute, run, RunOutcome};
