use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// The control name used in the markup and in the posted JSON.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            ContactField::Name | ContactField::Subject => InputKind::Text,
            ContactField::Email => InputKind::Email,
            ContactField::Message => InputKind::TextArea { rows: 4 },
        }
    }

    /// Only marks the control `required` in the markup. Nothing checks it
    /// server side.
    pub fn required(self) -> bool {
        !matches!(self, ContactField::Subject)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a contact form field")]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// What the visitor has typed so far. Every field is free text; empty is
/// as valid as anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Overwrites one field. The last value written wins.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };

        *slot = value.into();
    }

    /// Replays a decoded form body, in order, through [`ContactForm::set`].
    /// Keys that aren't one of our fields are skipped.
    pub fn apply_changes<I, K, V>(&mut self, changes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in changes {
            match key.as_ref().parse::<ContactField>() {
                Ok(field) => self.set(field, value),
                Err(unknown) => tracing::debug!(%unknown, "Ignoring form key"),
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::default();

        assert!(form.is_empty());
        for field in ContactField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_set_only_touches_one_field() {
        let mut form = ContactForm::default();

        form.set(ContactField::Name, "Asha");
        form.set(ContactField::Subject, "Borewell pumps");

        assert_eq!(form.name, "Asha");
        assert_eq!(form.email, "");
        assert_eq!(form.subject, "Borewell pumps");
        assert_eq!(form.message, "");

        form.set(ContactField::Name, "");
        assert_eq!(form.name, "");
        assert_eq!(form.subject, "Borewell pumps");
    }

    #[test]
    fn test_every_event_sequence_keeps_last_value() {
        let events = [
            (ContactField::Email, "a@"),
            (ContactField::Message, "Hello"),
            (ContactField::Email, "a@b.in"),
            (ContactField::Name, "R"),
            (ContactField::Message, "Hello there"),
            (ContactField::Name, "Ravi"),
        ];

        let mut form = ContactForm::default();
        let mut expected = ContactForm::default();

        for (field, value) in events {
            let before = form.clone();
            form.set(field, value);

            assert_eq!(form.get(field), value);
            for other in ContactField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(form.get(other), before.get(other));
            }

            match field {
                ContactField::Name => expected.name = value.to_string(),
                ContactField::Email => expected.email = value.to_string(),
                ContactField::Subject => expected.subject = value.to_string(),
                ContactField::Message => expected.message = value.to_string(),
            }
        }

        assert_eq!(form, expected);
    }

    #[test]
    fn test_repeated_identical_events_converge() {
        let mut once = ContactForm::default();
        once.set(ContactField::Message, "Need a quote");

        let mut many = ContactForm::default();
        for _ in 0..5 {
            many.set(ContactField::Message, "Need a quote");
        }

        assert_eq!(once, many);
    }

    #[test]
    fn test_apply_changes_ignores_unknown_keys() {
        let mut form = ContactForm::default();

        form.apply_changes([
            ("name", "Meera"),
            ("phone", "12345"),
            ("email", "meera@example.com"),
            ("name", "Meera K"),
        ]);

        assert_eq!(
            form,
            ContactForm {
                name: "Meera K".to_string(),
                email: "meera@example.com".to_string(),
                subject: String::new(),
                message: String::new(),
            }
        );
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(field.name().parse::<ContactField>(), Ok(field));
        }

        assert_eq!(
            "Name".parse::<ContactField>(),
            Err(UnknownField("Name".to_string()))
        );
    }

    #[test]
    fn test_only_subject_is_optional() {
        let optional: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|f| !f.required())
            .collect();

        assert_eq!(optional, vec![ContactField::Subject]);
    }

    #[test]
    fn test_json_shape() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "buyer@example.com");

        let json = serde_json::to_value(&form).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(json["name"], "");
        assert_eq!(json["email"], "buyer@example.com");
        assert_eq!(json["subject"], "");
        assert_eq!(json["message"], "");
    }
}
