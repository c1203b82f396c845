//! # design-cost
//!
//! The "calculate your design costs" enquiry form, independent of how it is
//! drawn.
//!
//! ## Usage
//!
//! ```rust
//! use design_cost::{
//!     ExtensionType, FormComponent, FormEvent, GroundFloorSubtype, PointerHub,
//! };
//!
//! let hub = PointerHub::new();
//! let form = FormComponent::mount(&hub);
//!
//! // "Ground Floor" opens the sub-type menu without answering yet.
//! form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
//! assert!(form.popover_open());
//!
//! // Picking a sub-type answers both questions and closes the menu.
//! form.handle(FormEvent::SelectGroundFloorSubtype(GroundFloorSubtype::Rear));
//! assert!(!form.popover_open());
//! assert_eq!(
//!     form.answers().extension.ground_floor_subtype(),
//!     Some(GroundFloorSubtype::Rear)
//! );
//! ```
//!
//! ## Frontends
//!
//! Frontends implement `FormFrontend`:
//! - `design-cost-ratatui-form` - terminal form with mouse support
//! - `ScriptedFrontend` (this crate) - replays interactions, for tests
//!
//! ## Submitters
//!
//! - `LogSubmitter` - logs the answers as JSON and accepts them
//! - `RecordingSubmitter` - keeps every submitted snapshot, for tests

// Re-export all types from design-cost-types
pub use design_cost_types::*;

mod log_submitter;
pub use log_submitter::LogSubmitter;

// Test doubles for driving the form without a user
mod test_frontend;
pub use test_frontend::{RecordingSubmitter, ScriptedFrontend, ScriptedFrontendError};
