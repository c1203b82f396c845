//! Integration tests for design-cost

use design_cost::{
    AnswerSet, Bedrooms, CheckboxField, Choice, ExtensionSelection, ExtensionType, FormComponent,
    FormCopy, FormError, FormEvent, FormFrontend, GroundFloorSubtype, PointerDown, PointerHub,
    PointerTarget, PropertyType, RecordingSubmitter, RequiredField, ScriptedFrontend,
    ScriptedFrontendError, Service, SubmitOutcome, TextField, Timeline,
};

fn mounted() -> (PointerHub, FormComponent) {
    let hub = PointerHub::new();
    let form = FormComponent::mount(&hub);
    (hub, form)
}

fn fill_required(form: &FormComponent) {
    for field in TextField::ALL {
        if field.is_required() {
            form.handle(FormEvent::SetText(field, format!("{} value", field.label())));
        }
    }
    form.handle(FormEvent::SetCheckbox(CheckboxField::AcceptTerms, true));
}

#[test]
fn test_single_select_last_click_wins() {
    let (_hub, form) = mounted();
    form.handle(FormEvent::SelectBedrooms(Bedrooms::Two));
    form.handle(FormEvent::SelectTimeline(Timeline::Asap));
    let before = form.answers();

    form.handle(FormEvent::SelectPropertyType(PropertyType::Detached));
    form.handle(FormEvent::SelectPropertyType(PropertyType::Terrace));

    let after = form.answers();
    assert_eq!(after.property_type, Some(PropertyType::Terrace));
    assert_eq!(
        AnswerSet {
            property_type: before.property_type,
            ..after
        },
        before
    );
}

#[test]
fn test_every_single_select_group_is_last_click_wins() {
    let (_hub, form) = mounted();
    for bedrooms in Bedrooms::ALL {
        form.handle(FormEvent::SelectBedrooms(*bedrooms));
    }
    for timeline in Timeline::ALL.iter().rev() {
        form.handle(FormEvent::SelectTimeline(*timeline));
    }
    form.handle(FormEvent::SelectExtensionType(ExtensionType::Other));
    form.handle(FormEvent::SelectExtensionType(ExtensionType::FirstFloor));

    let answers = form.answers();
    assert_eq!(answers.bedrooms, Some(Bedrooms::FivePlus));
    assert_eq!(answers.timeline, Some(Timeline::Asap));
    assert_eq!(answers.extension, ExtensionSelection::FirstFloor);
}

#[test]
fn test_reselecting_does_not_toggle_off() {
    let (_hub, form) = mounted();
    form.handle(FormEvent::SelectPropertyType(PropertyType::Flat));
    form.handle(FormEvent::SelectPropertyType(PropertyType::Flat));
    assert_eq!(form.answers().property_type, Some(PropertyType::Flat));
}

#[test]
fn test_service_toggle_is_its_own_inverse() {
    let (_hub, form) = mounted();
    form.handle(FormEvent::ToggleService(Service::DesignAndPlanningAdvice));
    let before = form.answers();

    form.handle(FormEvent::ToggleService(Service::FindingABuilder));
    form.handle(FormEvent::ToggleService(Service::FindingABuilder));
    assert_eq!(form.answers(), before);

    form.handle(FormEvent::ToggleService(Service::DesignAndPlanningAdvice));
    form.handle(FormEvent::ToggleService(Service::DesignAndPlanningAdvice));
    assert_eq!(form.answers(), before);
}

#[test]
fn test_services_keep_selection_order() {
    let (_hub, form) = mounted();
    form.handle(FormEvent::ToggleService(Service::FindingOtherProfessionals));
    form.handle(FormEvent::ToggleService(Service::ArchitecturalDrawings));
    assert_eq!(
        form.answers().services.as_slice(),
        [Service::FindingOtherProfessionals, Service::ArchitecturalDrawings]
    );
}

#[test]
fn test_ground_floor_trigger_toggles_popover_only() {
    let (hub, form) = mounted();
    let before = form.answers();

    hub.dispatch(PointerDown::new(PointerTarget::GroundFloorTrigger));
    form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
    assert!(form.popover_open());
    assert_eq!(form.answers(), before);

    hub.dispatch(PointerDown::new(PointerTarget::GroundFloorTrigger));
    form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
    assert!(!form.popover_open());
    assert_eq!(form.answers(), before);
}

#[test]
fn test_subtype_selection_is_atomic() {
    let (hub, form) = mounted();
    form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));

    hub.dispatch(PointerDown::new(PointerTarget::GroundFloorMenu));
    form.handle(FormEvent::SelectGroundFloorSubtype(GroundFloorSubtype::Rear));

    let answers = form.answers();
    assert_eq!(answers.extension.extension_type(), Some(ExtensionType::GroundFloor));
    assert_eq!(
        answers.extension.ground_floor_subtype(),
        Some(GroundFloorSubtype::Rear)
    );
    assert!(!form.popover_open());
}

#[test]
fn test_loft_while_popover_open_switches_and_closes() {
    let (hub, form) = mounted();
    form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
    form.handle(FormEvent::SelectGroundFloorSubtype(GroundFloorSubtype::Side));
    form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
    assert!(form.popover_open());

    hub.dispatch(PointerDown::new(PointerTarget::Elsewhere));
    form.handle(FormEvent::SelectExtensionType(ExtensionType::Loft));

    let answers = form.answers();
    assert_eq!(answers.extension, ExtensionSelection::Loft);
    assert_eq!(answers.extension.ground_floor_subtype(), None);
    assert!(!form.popover_open());
}

#[test]
fn test_loft_closes_popover_without_pointer_press() {
    // Keyboard activation: no press reaches the hub first.
    let (_hub, form) = mounted();
    form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
    form.handle(FormEvent::SelectExtensionType(ExtensionType::Loft));
    assert!(!form.popover_open());
    assert_eq!(form.answers().extension, ExtensionSelection::Loft);
}

#[test]
fn test_outside_press_closes_popover_and_keeps_answers() {
    let (hub, form) = mounted();
    form.handle(FormEvent::SelectPropertyType(PropertyType::Bungalow));
    form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
    let before = form.answers();

    hub.dispatch(PointerDown::new(PointerTarget::Elsewhere));

    assert!(!form.popover_open());
    assert_eq!(form.answers(), before);
}

#[test]
fn test_outside_press_while_closed_is_a_no_op() {
    let (hub, form) = mounted();
    hub.dispatch(PointerDown::new(PointerTarget::Elsewhere));
    assert!(!form.popover_open());
    assert_eq!(form.answers(), AnswerSet::new());
}

#[test]
fn test_submit_with_empty_required_fields_does_not_hand_off() {
    let (_hub, form) = mounted();
    let submitter = RecordingSubmitter::new();

    let err = form.submit(&submitter).unwrap_err();

    assert_eq!(submitter.count(), 0);
    assert_eq!(err.missing_fields().len(), 7);
    assert!(matches!(err, FormError::MissingRequired(_)));
}

#[test]
fn test_single_missing_field_blocks_hand_off() {
    let (_hub, form) = mounted();
    fill_required(&form);
    form.handle(FormEvent::SetText(TextField::Email, String::new()));
    let submitter = RecordingSubmitter::new();

    let err = form.submit(&submitter).unwrap_err();

    assert_eq!(submitter.count(), 0);
    assert_eq!(err.missing_fields(), [RequiredField::Text(TextField::Email)]);
}

#[test]
fn test_submit_hands_off_exact_snapshot_once() {
    let (_hub, form) = mounted();
    form.handle(FormEvent::SelectPropertyType(PropertyType::SemiDetached));
    form.handle(FormEvent::SelectExtensionType(ExtensionType::GroundFloor));
    form.handle(FormEvent::SelectGroundFloorSubtype(GroundFloorSubtype::Wraparound));
    form.handle(FormEvent::ToggleService(Service::ArchitecturalDrawings));
    fill_required(&form);
    let submitter = RecordingSubmitter::new();

    let outcome = form.submit(&submitter).unwrap();

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(submitter.submissions(), [form.answers()]);
}

#[test]
fn test_rejection_is_reported_to_caller() {
    let (_hub, form) = mounted();
    fill_required(&form);
    let submitter = RecordingSubmitter::with_outcome(SubmitOutcome::rejected("try again later"));

    let outcome = form.submit(&submitter).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected("try again later".to_string()));
    assert_eq!(submitter.count(), 1);
}

#[test]
fn test_closure_submitter() {
    let (_hub, form) = mounted();
    fill_required(&form);
    let reject_flats = |answers: &AnswerSet| match answers.property_type {
        Some(PropertyType::Flat) => SubmitOutcome::rejected("flats are not covered"),
        _ => SubmitOutcome::Accepted,
    };

    assert!(form.submit(&reject_flats).unwrap().is_accepted());
    form.handle(FormEvent::SelectPropertyType(PropertyType::Flat));
    assert!(!form.submit(&reject_flats).unwrap().is_accepted());
}

#[test]
fn test_scripted_frontend_full_enquiry() {
    let hub = PointerHub::new();
    let submitter = RecordingSubmitter::new();

    let answers = ScriptedFrontend::new()
        .with_hub(&hub)
        .select_property_type(PropertyType::Detached)
        .select_extension_type(ExtensionType::GroundFloor)
        .select_ground_floor_subtype(GroundFloorSubtype::SideAndRear)
        .select_bedrooms(Bedrooms::Four)
        .select_timeline(Timeline::SixMonths)
        .toggle_service(Service::BuildFinancing)
        .toggle_service(Service::FindingABuilder)
        .fill_required_details()
        .type_text(TextField::Source, "A friend")
        .set_checkbox(CheckboxField::Newsletter, true)
        .submit()
        .collect(&FormCopy::default(), &submitter)
        .unwrap();

    assert_eq!(answers.property_type, Some(PropertyType::Detached));
    assert_eq!(
        answers.extension,
        ExtensionSelection::GroundFloor(GroundFloorSubtype::SideAndRear)
    );
    assert_eq!(answers.bedrooms, Some(Bedrooms::Four));
    assert_eq!(answers.timeline, Some(Timeline::SixMonths));
    assert_eq!(
        answers.services.as_slice(),
        [Service::BuildFinancing, Service::FindingABuilder]
    );
    assert_eq!(answers.first_name, "Ada");
    assert_eq!(answers.source, "A friend");
    assert!(answers.accept_terms);
    assert!(answers.newsletter);
    assert_eq!(submitter.submissions(), [answers]);

    // The form was unmounted when the frontend returned.
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_scripted_outside_press_keeps_previous_answer() {
    let submitter = RecordingSubmitter::new();

    let answers = ScriptedFrontend::new()
        .select_extension_type(ExtensionType::Loft)
        .select_extension_type(ExtensionType::GroundFloor)
        .press(PointerTarget::Elsewhere)
        .fill_required_details()
        .submit()
        .collect(&FormCopy::default(), &submitter)
        .unwrap();

    assert_eq!(answers.extension, ExtensionSelection::Loft);
}

#[test]
fn test_scripted_blocked_submit_then_retry() {
    let submitter = RecordingSubmitter::new();

    let answers = ScriptedFrontend::new()
        .submit()
        .fill_required_details()
        .submit()
        .collect(&FormCopy::default(), &submitter)
        .unwrap();

    assert_eq!(submitter.count(), 1);
    assert_eq!(answers.last_name, "Lovelace");
}

#[test]
fn test_scripted_without_accepted_submit_fails() {
    let hub = PointerHub::new();
    let submitter = RecordingSubmitter::new();

    let err = ScriptedFrontend::new()
        .with_hub(&hub)
        .type_text(TextField::FirstName, "Ada")
        .submit()
        .collect(&FormCopy::default(), &submitter)
        .unwrap_err();

    match err {
        ScriptedFrontendError::NotSubmitted { blocked, rejected } => {
            assert_eq!(blocked.len(), 6);
            assert!(!blocked.contains(&RequiredField::Text(TextField::FirstName)));
            assert_eq!(rejected, None);
        }
    }
    assert_eq!(submitter.count(), 0);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_typing_stores_every_keystroke_verbatim() {
    let (_hub, form) = mounted();
    form.handle(FormEvent::SetText(TextField::Phone, " 07".to_string()));
    assert_eq!(form.answers().phone, " 07");
    form.handle(FormEvent::SetText(TextField::Phone, " 07 ".to_string()));
    assert_eq!(form.answers().phone, " 07 ");
}
