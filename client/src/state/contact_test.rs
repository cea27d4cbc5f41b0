use super::*;

fn filled() -> ContactDraft {
    ContactDraft {
        name: "  Moumita Das ".to_owned(),
        email: "moumita@example.edu".to_owned(),
        message: "Bins near the library are full.".to_owned(),
        error: None,
    }
}

#[test]
fn submit_returns_values_as_typed_and_resets() {
    let mut draft = filled();
    let submission = draft.submit().unwrap();
    assert_eq!(submission.name, "  Moumita Das ");
    assert_eq!(submission.email, "moumita@example.edu");
    assert_eq!(draft, ContactDraft::default());
}

#[test]
fn blank_field_is_rejected_and_draft_kept() {
    let mut draft = ContactDraft { email: "   ".to_owned(), ..filled() };
    assert_eq!(draft.submit(), Err(ContactError::MissingEmail));
    assert_eq!(draft.error, Some(ContactError::MissingEmail));
    assert_eq!(draft.message, "Bins near the library are full.");
}

#[test]
fn first_missing_field_is_reported() {
    let mut draft = ContactDraft::default();
    assert_eq!(draft.submit(), Err(ContactError::MissingName));
}

#[test]
fn successful_submit_clears_previous_error() {
    let mut draft = ContactDraft { message: String::new(), ..filled() };
    assert!(draft.submit().is_err());
    draft.message = "Fixed.".to_owned();
    assert!(draft.submit().is_ok());
    assert_eq!(draft.error, None);
}

#[test]
fn log_line_contains_json_payload() {
    let submission = filled().submit().unwrap();
    assert_eq!(
        submission.log_line(),
        r#"Form submitted: {"name":"  Moumita Das ","email":"moumita@example.edu","message":"Bins near the library are full."}"#
    );
}

#[test]
fn editing_a_field_dismisses_the_error() {
    let mut draft = ContactDraft { email: String::new(), ..filled() };
    assert!(draft.submit().is_err());
    draft.edit(ContactField::Email, "m".to_owned());
    assert_eq!(draft.error, None);
    assert_eq!(draft.email, "m");
}

#[test]
fn edit_targets_only_the_named_field() {
    let mut draft = ContactDraft::default();
    draft.edit(ContactField::Name, "Ratul".to_owned());
    draft.edit(ContactField::Message, "Overflowing bin".to_owned());
    assert_eq!(draft.name, "Ratul");
    assert_eq!(draft.email, "");
    assert_eq!(draft.message, "Overflowing bin");
}
