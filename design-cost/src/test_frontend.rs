//! Test doubles for driving the form without user interaction.
//!
//! `ScriptedFrontend` replays a fixed list of interactions against a mounted
//! form, the way a browser would deliver them: every click is preceded by a
//! pointer press dispatched through the [`PointerHub`]. `RecordingSubmitter`
//! keeps every snapshot it was handed.
//!
//! # Example
//!
//! ```rust
//! use design_cost::{
//!     FormCopy, FormFrontend, PropertyType, RecordingSubmitter, ScriptedFrontend,
//! };
//!
//! let submitter = RecordingSubmitter::new();
//! let answers = ScriptedFrontend::new()
//!     .select_property_type(PropertyType::Flat)
//!     .fill_required_details()
//!     .submit()
//!     .collect(&FormCopy::default(), &submitter)
//!     .unwrap();
//!
//! assert_eq!(answers.property_type, Some(PropertyType::Flat));
//! assert_eq!(submitter.count(), 1);
//! ```

use std::cell::RefCell;

use design_cost_types::{
    AnswerSet, Bedrooms, CheckboxField, ExtensionType, FormComponent, FormCopy, FormError,
    FormEvent, FormFrontend, GroundFloorSubtype, PointerDown, PointerHub, PointerTarget,
    PropertyType, RequiredField, Service, SubmitOutcome, Submitter, TextField, Timeline,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Press(PointerTarget),
    Event(FormEvent),
    Submit,
}

/// A frontend that replays pre-defined interactions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    steps: Vec<Step>,
    hub: PointerHub,
}

/// Error type for ScriptedFrontend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedFrontendError {
    #[error("Script ended without an accepted submission")]
    NotSubmitted {
        /// Required fields that blocked the last submit attempt, if any.
        blocked: Vec<RequiredField>,
        /// Reason given by the submitter for the last rejection, if any.
        rejected: Option<String>,
    },
}

impl ScriptedFrontend {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch presses through `hub` instead of a private one.
    pub fn with_hub(mut self, hub: &PointerHub) -> Self {
        self.hub = hub.clone();
        self
    }

    /// A pointer press that is not followed by a click, e.g. on the page
    /// background.
    pub fn press(mut self, target: PointerTarget) -> Self {
        self.steps.push(Step::Press(target));
        self
    }

    /// Click an element outside the ground-floor menu.
    pub fn click(self, event: FormEvent) -> Self {
        self.press(PointerTarget::Elsewhere).event(event)
    }

    /// Deliver an event with no pointer press in front (keyboard input).
    pub fn event(mut self, event: FormEvent) -> Self {
        self.steps.push(Step::Event(event));
        self
    }

    pub fn select_property_type(self, property: PropertyType) -> Self {
        self.click(FormEvent::SelectPropertyType(property))
    }

    /// Click one of the top-level extension buttons.
    pub fn select_extension_type(self, extension: ExtensionType) -> Self {
        let target = match extension {
            ExtensionType::GroundFloor => PointerTarget::GroundFloorTrigger,
            _ => PointerTarget::Elsewhere,
        };
        self.press(target)
            .event(FormEvent::SelectExtensionType(extension))
    }

    /// Click an option inside the ground-floor menu.
    pub fn select_ground_floor_subtype(self, subtype: GroundFloorSubtype) -> Self {
        self.press(PointerTarget::GroundFloorMenu)
            .event(FormEvent::SelectGroundFloorSubtype(subtype))
    }

    pub fn select_bedrooms(self, bedrooms: Bedrooms) -> Self {
        self.click(FormEvent::SelectBedrooms(bedrooms))
    }

    pub fn select_timeline(self, timeline: Timeline) -> Self {
        self.click(FormEvent::SelectTimeline(timeline))
    }

    pub fn toggle_service(self, service: Service) -> Self {
        self.click(FormEvent::ToggleService(service))
    }

    /// Focus a text input and type `value` one keystroke at a time.
    pub fn type_text(mut self, field: TextField, value: &str) -> Self {
        self = self.press(PointerTarget::Elsewhere);
        let mut typed = String::new();
        for c in value.chars() {
            typed.push(c);
            self = self.event(FormEvent::SetText(field, typed.clone()));
        }
        self
    }

    pub fn set_checkbox(self, field: CheckboxField, checked: bool) -> Self {
        self.click(FormEvent::SetCheckbox(field, checked))
    }

    /// Fill every required field with placeholder values.
    pub fn fill_required_details(self) -> Self {
        self.type_text(TextField::FirstName, "Ada")
            .type_text(TextField::LastName, "Lovelace")
            .type_text(TextField::Address, "12 St James's Square")
            .type_text(TextField::Postcode, "SW1Y 4JH")
            .type_text(TextField::Email, "ada@example.com")
            .type_text(TextField::Phone, "020 7946 0000")
            .set_checkbox(CheckboxField::AcceptTerms, true)
    }

    /// Click the submit button.
    pub fn submit(self) -> Self {
        let mut this = self.press(PointerTarget::Elsewhere);
        this.steps.push(Step::Submit);
        this
    }
}

impl FormFrontend for ScriptedFrontend {
    type Error = ScriptedFrontendError;

    fn collect(
        &self,
        _copy: &FormCopy,
        submitter: &dyn Submitter,
    ) -> Result<AnswerSet, Self::Error> {
        let form = FormComponent::mount(&self.hub);
        let mut blocked = Vec::new();
        let mut rejected = None;

        for step in &self.steps {
            match step {
                Step::Press(target) => self.hub.dispatch(PointerDown::new(*target)),
                Step::Event(event) => form.handle(event.clone()),
                Step::Submit => match form.submit(submitter) {
                    Ok(SubmitOutcome::Accepted) => return Ok(form.answers()),
                    Ok(SubmitOutcome::Rejected(reason)) => {
                        blocked.clear();
                        rejected = Some(reason);
                    }
                    Err(FormError::MissingRequired(fields)) => {
                        blocked = fields;
                        rejected = None;
                    }
                    Err(_) => {}
                },
            }
        }

        Err(ScriptedFrontendError::NotSubmitted { blocked, rejected })
    }
}

/// A submitter that records every snapshot it receives.
#[derive(Debug)]
pub struct RecordingSubmitter {
    outcome: SubmitOutcome,
    submissions: RefCell<Vec<AnswerSet>>,
}

impl Default for RecordingSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSubmitter {
    /// Records and accepts every submission.
    pub fn new() -> Self {
        Self::with_outcome(SubmitOutcome::Accepted)
    }

    /// Records every submission and answers with `outcome`.
    pub fn with_outcome(outcome: SubmitOutcome) -> Self {
        Self {
            outcome,
            submissions: RefCell::new(Vec::new()),
        }
    }

    /// Every snapshot handed over so far, oldest first.
    pub fn submissions(&self) -> Vec<AnswerSet> {
        self.submissions.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.submissions.borrow().len()
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(&self, answers: &AnswerSet) -> SubmitOutcome {
        self.submissions.borrow_mut().push(answers.clone());
        self.outcome.clone()
    }
}
