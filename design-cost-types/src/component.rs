//! The form state machine.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::{
    AnswerSet, Bedrooms, CheckboxField, ExtensionSelection, ExtensionType, FormError,
    GroundFloorSubtype, PointerHub, Popover, PropertyType, Service, SubmitOutcome, Submitter,
    Subscription, TextField, Timeline,
};

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SelectPropertyType(PropertyType),
    /// Click on one of the top-level extension buttons.
    ///
    /// `GroundFloor` only toggles the sub-type menu; the other types are
    /// stored straight away and close the menu.
    SelectExtensionType(ExtensionType),
    /// Click on an option inside the ground-floor menu.
    SelectGroundFloorSubtype(GroundFloorSubtype),
    SelectBedrooms(Bedrooms),
    SelectTimeline(Timeline),
    ToggleService(Service),
    SetText(TextField, String),
    SetCheckbox(CheckboxField, bool),
    /// Close the ground-floor menu without answering (e.g. Escape).
    DismissPopover,
}

#[derive(Debug, Default)]
struct FormState {
    answers: AnswerSet,
    popover: Popover,
}

/// A mounted form.
///
/// Mounting registers an outside-click listener on the [`PointerHub`];
/// dropping the component unmounts it and releases the listener.
#[derive(Debug)]
pub struct FormComponent {
    state: Rc<RefCell<FormState>>,
    _outside_click: Subscription,
}

impl FormComponent {
    pub fn mount(hub: &PointerHub) -> Self {
        let state = Rc::new(RefCell::new(FormState::default()));

        let weak = Rc::downgrade(&state);
        let outside_click = hub.subscribe(move |event| {
            if !event.target.is_outside_menu() {
                return;
            }
            if let Some(shared) = weak.upgrade()
                && let Ok(mut state) = shared.try_borrow_mut()
                && state.popover.close()
            {
                tracing::debug!("ground floor menu dismissed by outside click");
            }
        });

        tracing::debug!("form mounted");
        Self {
            state,
            _outside_click: outside_click,
        }
    }

    /// Apply one interaction.
    pub fn handle(&self, event: FormEvent) {
        tracing::debug!(?event, "form event");
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        match event {
            FormEvent::SelectPropertyType(property) => {
                state.answers.property_type = Some(property);
            }
            FormEvent::SelectExtensionType(extension) => {
                match ExtensionSelection::plain(extension) {
                    Some(selection) => {
                        state.answers.extension = selection;
                        state.popover.close();
                    }
                    None => {
                        state.popover.toggle();
                    }
                }
            }
            FormEvent::SelectGroundFloorSubtype(subtype) => {
                state.answers.extension = ExtensionSelection::GroundFloor(subtype);
                state.popover.close();
            }
            FormEvent::SelectBedrooms(bedrooms) => {
                state.answers.bedrooms = Some(bedrooms);
            }
            FormEvent::SelectTimeline(timeline) => {
                state.answers.timeline = Some(timeline);
            }
            FormEvent::ToggleService(service) => {
                state.answers.services.toggle(service);
            }
            FormEvent::SetText(field, value) => {
                state.answers.set_text(field, value);
            }
            FormEvent::SetCheckbox(field, checked) => {
                state.answers.set_checkbox(field, checked);
            }
            FormEvent::DismissPopover => {
                state.popover.close();
            }
        }
    }

    /// Hand the current answers to `submitter`.
    ///
    /// Nothing is handed off while a required field is unanswered.
    pub fn submit(&self, submitter: &dyn Submitter) -> Result<SubmitOutcome, FormError> {
        let snapshot = self.answers();
        let missing = snapshot.missing_required();
        if !missing.is_empty() {
            tracing::warn!(?missing, "submission blocked by required fields");
            return Err(FormError::MissingRequired(missing));
        }

        let outcome = submitter.submit(&snapshot);
        tracing::debug!(?outcome, "submission handed off");
        Ok(outcome)
    }

    /// Snapshot of the current answers.
    pub fn answers(&self) -> AnswerSet {
        self.state.borrow().answers.clone()
    }

    /// Borrow the current answers without cloning.
    ///
    /// The borrow must be released before the next [`FormComponent::handle`].
    pub fn answers_ref(&self) -> Ref<'_, AnswerSet> {
        Ref::map(self.state.borrow(), |state| &state.answers)
    }

    pub fn popover_open(&self) -> bool {
        self.state.borrow().popover.is_open()
    }

    /// Whether a top-level extension button shows as selected.
    pub fn is_extension_selected(&self, extension: ExtensionType) -> bool {
        self.state.borrow().answers.extension.extension_type() == Some(extension)
    }
}

impl Drop for FormComponent {
    fn drop(&mut self) {
        tracing::debug!("form unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointerDown, PointerTarget};

    #[test]
    fn mount_registers_one_listener_and_unmount_releases_it() {
        let hub = PointerHub::new();
        let form = FormComponent::mount(&hub);
        assert_eq!(hub.listener_count(), 1);
        drop(form);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn listener_is_released_on_unwind() {
        let hub = PointerHub::new();
        let inner = hub.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _form = FormComponent::mount(&inner);
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn two_forms_do_not_share_state() {
        let hub = PointerHub::new();
        let a = FormComponent::mount(&hub);
        let b = FormComponent::mount(&hub);
        a.handle(FormEvent::SelectBedrooms(Bedrooms::Two));
        assert_eq!(b.answers().bedrooms, None);
        assert_eq!(hub.listener_count(), 2);
    }

    #[test]
    fn ground_floor_button_reads_selected_only_after_subtype() {
        let hub = PointerHub::new();
        let form = FormComponent::mount(&hub);

        form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
        assert!(!form.is_extension_selected(ExtensionType::GroundFloor));

        form.handle(FormEvent::SelectGroundFloorSubtype(GroundFloorSubtype::Side));
        assert!(form.is_extension_selected(ExtensionType::GroundFloor));
        assert!(!form.is_extension_selected(ExtensionType::Loft));
    }

    #[test]
    fn press_on_menu_keeps_it_open() {
        let hub = PointerHub::new();
        let form = FormComponent::mount(&hub);
        form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));

        hub.dispatch(PointerDown::new(PointerTarget::GroundFloorMenu));
        assert!(form.popover_open());
    }

    #[test]
    fn escape_dismisses_without_answering() {
        let hub = PointerHub::new();
        let form = FormComponent::mount(&hub);
        form.handle(FormEvent::SelectExtensionType(ExtensionType::Loft));
        form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));

        form.handle(FormEvent::DismissPopover);
        assert!(!form.popover_open());
        assert_eq!(form.answers().extension, ExtensionSelection::Loft);
    }

    #[test]
    fn checkbox_can_be_cleared() {
        let hub = PointerHub::new();
        let form = FormComponent::mount(&hub);
        form.handle(FormEvent::SetCheckbox(CheckboxField::Newsletter, true));
        form.handle(FormEvent::SetCheckbox(CheckboxField::Newsletter, false));
        assert!(!form.answers_ref().newsletter);
    }
}
