//! UI layer
//!
//! Two front ends share the study core:
//!
//! - **`tui`** - the interactive ratatui study screen
//! - **`output`** - plain status messages for the one-shot subcommands
//!
//! # Output Messages
//!
//! ```
//! use flashmaster::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new(false);
//! output.success("Loaded 12 cards");
//! output.error("Failed to parse CSV. Please check the format.");
//! output.warning("2 rows skipped");
//! output.info("Additional info");
//! ```
//!
//! # Buffered Messages
//!
//! ```
//! use flashmaster::ui::output::{BufferedWriter, OutputWriter};
//!
//! let writer = BufferedWriter::new();
//! writer.success("Progress reset");
//! assert_eq!(writer.text(), "Progress reset");
//! ```

mod error;

pub mod output;
pub mod tui;

pub use error::{Result, UiError};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use tui::StudyApp;
