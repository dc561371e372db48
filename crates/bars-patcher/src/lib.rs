//! BARS header patcher.
//!
//! Replaces the copy of a BWAV header embedded in a BARS archive with the
//! header of another BWAV file. The embedded record is found by the CRC32
//! stored in the original BWAV header rather than by offset.
//!
//! # Example
//!
//! ```no_run
//! use bars_patcher::{PatchConfig, Patcher};
//!
//! fn main() -> anyhow::Result<()> {
//!     tracing_subscriber::fmt::init();
//!
//!     let config = PatchConfig::try_from_args(std::env::args_os())?;
//!     let report = Patcher::new(config).run()?;
//!     println!("patched {} bytes at {:#x}", report.patch_length, report.region.offset);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod config;
pub mod error;
pub mod patcher;

pub use config::{LogLevel, PatchConfig};
pub use error::{EXIT_FAILURE, FileRole, PatchError, PatchResult};
pub use patcher::{PatchOutcome, PatchReport, Patcher, patch_archive};
