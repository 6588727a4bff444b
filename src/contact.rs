//! Contact Form
//!
//! Field model for the "Get In Touch" form. Every field is required, after
//! trimming, and the email must match the HTML `type="email"` address
//! grammar. A valid form becomes a `mailto:` draft, nothing is sent by the
//! page itself.

use std::fmt;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Message,
    ];

    /// `id` / `name` attribute of the input
    pub fn name(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email Address",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field.label()),
            FieldErrorKind::InvalidEmail => write!(f, "{} is not a valid email address", self.field.label()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// All field errors, in form order
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = ContactField::ALL
            .iter()
            .filter_map(|&field| {
                let value = self.value(field).trim();
                if value.is_empty() {
                    Some(FieldError { field, kind: FieldErrorKind::Required })
                } else if field == ContactField::Email && !is_valid_email(value) {
                    Some(FieldError { field, kind: FieldErrorKind::InvalidEmail })
                } else {
                    None
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `mailto:` URL addressed to `recipient` carrying the form as a draft
    pub fn mailto_href(&self, recipient: &str) -> String {
        let subject = format!(
            "Portfolio enquiry from {} {}",
            self.first_name.trim(),
            self.last_name.trim()
        );
        let body = format!("{}\n\nReply to: {}", self.message.trim(), self.email.trim());
        format!(
            "{}?subject={}&body={}",
            mailto_link(recipient),
            utf8_percent_encode(&subject, NON_ALPHANUMERIC),
            utf8_percent_encode(&body, NON_ALPHANUMERIC)
        )
    }
}

/// `href` for a plain email link
pub fn mailto_link(address: &str) -> String {
    format!("mailto:{}", address.trim())
}

/// Characters allowed in the local part of a `type="email"` address
const LOCAL_PUNCTUATION: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Longest DNS label
const MAX_LABEL_LEN: usize = 63;

/// Address check following the HTML `type="email"` grammar: an ASCII local
/// part, `@`, then one or more dot-separated hostname labels. A single-label
/// domain such as `localhost` is valid.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(c))
        && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    (1..=MAX_LABEL_LEN).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's work together.".to_string(),
        }
    }

    #[test]
    fn test_empty_form_rejects_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<ContactField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ContactField::ALL.to_vec());
        assert!(errors.iter().all(|e| e.kind == FieldErrorKind::Required));
    }

    #[test]
    fn test_populated_form_accepted() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_each_required_field() {
        for field in ContactField::ALL {
            let mut form = filled();
            form.set(field, "   ".to_string());
            let errors = form.validate().unwrap_err();
            assert_eq!(errors, vec![FieldError { field, kind: FieldErrorKind::Required }]);
        }
    }

    #[test]
    fn test_bad_email() {
        let mut form = filled();
        form.email = "yongamadingiso@!gmail".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].kind, FieldErrorKind::InvalidEmail);
        assert_eq!(errors[0].to_string(), "Email Address is not a valid email address");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("yongamadingiso@gmail.com"));
        assert!(!is_valid_email("yongamadingiso@!gmail.com"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@gmail.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_email_matches_browser_grammar() {
        // Accepted by `type="email"`
        assert!(is_valid_email("a@localhost"));
        assert!(is_valid_email("first.last+tag@mail-server.example.org"));
        assert!(is_valid_email("o'brien@example.ie"));
        // Rejected by `type="email"`
        assert!(!is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@.example.com"));
        assert!(!is_valid_email("a@example.com."));
        assert!(!is_valid_email("a@-example.com"));
        assert!(!is_valid_email("a@example-.com"));
        assert!(!is_valid_email("a@bücher.de"));
        assert!(!is_valid_email("jürgen@example.de"));
        assert!(!is_valid_email(&format!("a@{}.com", "x".repeat(64))));
        assert!(is_valid_email(&format!("a@{}.com", "x".repeat(63))));
    }

    #[test]
    fn test_mailto_href() {
        let href = filled().mailto_href("yongamadingiso@gmail.com");
        assert!(href.starts_with("mailto:yongamadingiso@gmail.com?subject=Portfolio%20enquiry%20from%20Ada%20Lovelace"));
        assert!(href.contains("&body=Let%27s%20work%20together%2E%0A%0AReply%20to%3A%20ada%40example%2Ecom"));
    }
}
