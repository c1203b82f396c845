//! # design-cost-ratatui-form
//!
//! Ratatui frontend for the design-cost form.
//!
//! Every question is shown at once in a scrollable terminal form. Options
//! can be clicked with the mouse or reached with Tab/Shift+Tab and the arrow
//! keys. Clicking "Ground Floor" opens a small menu of ground-floor
//! extension types; clicking anywhere else closes it again.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use design_cost::{FormCopy, FormFrontend, LogSubmitter};
//! use design_cost_ratatui_form::RatatuiFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = RatatuiFormBackend::new();
//!     let answers = backend.collect(&FormCopy::default(), &LogSubmitter::new())?;
//!     println!("{answers:#?}");
//!     Ok(())
//! }
//! ```

mod backend;
mod view;

pub use backend::{RatatuiFormBackend, RatatuiFormError, Theme};
