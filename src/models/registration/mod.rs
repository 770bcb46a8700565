use std::fmt;
use thiserror::Error;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Event track a participant registers for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Technical,
    Gaming,
    Cultural,
    Fun,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Technical,
        Category::Gaming,
        Category::Cultural,
        Category::Fun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Gaming => "Gaming",
            Category::Cultural => "Cultural",
            Category::Fun => "Fun",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Please enter your full name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("Please enter a phone number")]
    MissingPhone,
    #[error("'{0}' is not a valid phone number")]
    InvalidPhone(String),
}

/// Draft form contents, edited directly by the registration widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Category,
    pub notes: String,
}

/// A validated registration ready to hand off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Category,
    pub notes: String,
}

impl RegistrationForm {
    /// Check the required fields and produce a trimmed [`Registration`].
    ///
    /// Fields are checked in form order; the first problem wins.
    pub fn validate(&self) -> Result<Registration, RegistrationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RegistrationError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(RegistrationError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(RegistrationError::InvalidEmail(email.to_string()));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(RegistrationError::MissingPhone);
        }
        if !is_plausible_phone(phone) {
            return Err(RegistrationError::InvalidPhone(phone.to_string()));
        }

        Ok(Registration {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            category: self.category,
            notes: self.notes.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn is_plausible_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    allowed && (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            name: "  Ananya Rao ".into(),
            email: "ananya@example.com".into(),
            phone: "98765 43210".into(),
            category: Category::Gaming,
            notes: " Team Phoenix \n".into(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let registration = filled().validate().unwrap();
        assert_eq!(
            registration,
            Registration {
                name: "Ananya Rao".into(),
                email: "ananya@example.com".into(),
                phone: "98765 43210".into(),
                category: Category::Gaming,
                notes: "Team Phoenix".into(),
            }
        );
    }

    #[test]
    fn test_notes_are_optional() {
        let mut form = filled();
        form.notes.clear();
        assert_eq!(form.validate().unwrap().notes, "");
    }

    #[test]
    fn test_first_missing_field_wins() {
        let form = RegistrationForm::default();
        assert_eq!(form.validate(), Err(RegistrationError::MissingName));

        let mut form = filled();
        form.email = "   ".into();
        form.phone.clear();
        assert_eq!(form.validate(), Err(RegistrationError::MissingEmail));
    }

    #[test_case("plainaddress" ; "no at sign")]
    #[test_case("@example.com" ; "empty local part")]
    #[test_case("a@b" ; "undotted domain")]
    #[test_case("a@b.c@d.e" ; "two at signs")]
    #[test_case("a b@example.com" ; "whitespace")]
    fn test_rejects_bad_email(email: &str) {
        let mut form = filled();
        form.email = email.into();
        assert_eq!(
            form.validate(),
            Err(RegistrationError::InvalidEmail(email.to_string()))
        );
    }

    #[test_case("+91 98765 43210", true ; "international")]
    #[test_case("040-2345678", true ; "landline")]
    #[test_case("12345", false ; "too short")]
    #[test_case("98765x43210", false ; "letters")]
    #[test_case("1234567890123456", false ; "too long")]
    fn test_phone_rules(phone: &str, ok: bool) {
        let mut form = filled();
        form.phone = phone.into();
        assert_eq!(form.validate().is_ok(), ok);
    }

    #[test]
    fn test_clear_resets_category() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, RegistrationForm::default());
        assert_eq!(form.category, Category::Technical);
    }

    #[test]
    fn test_categories_display_by_name() {
        let labels: Vec<String> = Category::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["Technical", "Gaming", "Cultural", "Fun"]);
    }
}
