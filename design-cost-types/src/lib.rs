//! Core types for the design-cost form.
//!
//! This crate is presentation-agnostic:
//! - `Choice` enums - the fixed option lists (property type, extension type, ...)
//! - `AnswerSet` - everything the user has answered so far
//! - `FormComponent` and `FormEvent` - the state machine behind the form
//! - `PointerHub` - document-level pointer dispatch for outside-click detection
//! - `Submitter` and `FormFrontend` traits - the submission and render seams

mod choice;
pub use choice::{Bedrooms, Choice, ExtensionType, GroundFloorSubtype, PropertyType, Service, Timeline};

mod extension;
pub use extension::ExtensionSelection;

mod services;
pub use services::ServiceSet;

mod answer_set;
pub use answer_set::{AnswerSet, CheckboxField, RequiredField, TextField};

mod popover;
pub use popover::Popover;

mod pointer;
pub use pointer::{PointerDown, PointerHub, PointerTarget, Subscription};

mod submit;
pub use submit::{SubmitOutcome, Submitter};

mod component;
pub use component::{FormComponent, FormEvent};

mod copy;
pub use copy::FormCopy;

mod error;
pub use error::FormError;

mod traits;
pub use traits::FormFrontend;
