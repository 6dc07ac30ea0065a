//! Output generation for the rendered page.
//!
//! # Submodules
//!
//! - [`html`]: Serializes the page controller's state into an HTML document
//! - [`json`]: Writes the normalized records and page state as JSON
//!
//! # Output Structure
//!
//! ```text
//! index.html                 # --html-output
//! json_output_dir/
//! └── news.json              # --json-output-dir (optional)
//! ```

pub mod html;
pub mod json;
