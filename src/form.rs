/// Contact form field values as read from the DOM at submit time.
#[derive(Clone, Copy, Debug)]
pub struct Submission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingField,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            FormError::MissingField => "Please fill in all fields",
        }
    }
}

impl Submission<'_> {
    /// Every field must be non-empty. Whitespace-only values pass; the check
    /// matches the page's original falsy-string semantics.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(FormError::MissingField);
        }
        Ok(())
    }
}
