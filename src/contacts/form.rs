use crate::api::models::ContactPayload;
use crate::contacts::render::EntryAction;

pub const NAME_MAX_CHARS: usize = 50;
pub const PHONE_DIGITS: usize = 10;

pub const NAME_ERROR: &str = "Please enter a name that is no more than 50 characters, including spaces.";
pub const EMAIL_ERROR: &str = "Please enter a valid email address that includes \"@\".";
pub const PHONE_ERROR: &str = "Please enter a phone number that only consists of exactly 10 digits.";
pub const TAGS_ERROR: &str = "Please select at least one tag.";

/// What the shared form is doing while it is open. `Edit` keeps the
/// affordance that opened it, so the PUT goes to that entry's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntryAction),
}

/// Raw values read off the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone_number: Option<&'static str>,
    pub tags: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.tags.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: "someone@example.com".into(),
            phone_number: "1112223333".into(),
        }
    }
}

fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

fn valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= NAME_MAX_CHARS
}

impl ContactFormInput {
    pub fn validate(&self) -> FormErrors {
        FormErrors {
            full_name: (!valid_name(&self.full_name)).then_some(NAME_ERROR),
            email: (!valid_email(&self.email)).then_some(EMAIL_ERROR),
            phone_number: (!valid_phone(&self.phone_number)).then_some(PHONE_ERROR),
            tags: self.tags.is_empty().then_some(TAGS_ERROR),
        }
    }

    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            full_name: self.full_name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            tags: self.tags.join(","),
        }
    }
}
