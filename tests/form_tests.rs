// Host-side tests for contact form validation.

#![allow(dead_code)]
mod form {
    include!("../src/form.rs");
}

use form::*;

fn filled() -> Submission<'static> {
    Submission {
        name: "Ada",
        email: "ada@example.com",
        subject: "Hello",
        message: "Nice site!",
    }
}

#[test]
fn complete_submission_is_accepted() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn any_empty_field_is_rejected() {
    for i in 0..4 {
        let mut s = filled();
        match i {
            0 => s.name = "",
            1 => s.email = "",
            2 => s.subject = "",
            _ => s.message = "",
        }
        assert_eq!(s.validate(), Err(FormError::MissingField), "field {}", i);
    }
}

#[test]
fn whitespace_only_fields_pass() {
    // Matches the original falsy-string check: only truly empty values fail.
    let mut s = filled();
    s.subject = "   ";
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn error_carries_the_user_facing_message() {
    let mut s = filled();
    s.email = "";
    let err = s.validate().unwrap_err();
    assert_eq!(err.message(), "Please fill in all fields");
}
