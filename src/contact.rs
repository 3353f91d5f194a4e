//! The three-step contact prompt.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Name => "Enter your name:",
            Self::Email => "Enter your email:",
            Self::Message => "Enter your message:",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Email),
            Self::Email => Some(Self::Message),
            Self::Message => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactWizard {
    form: ContactForm,
    current: Field,
}

impl ContactWizard {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn current(&self) -> Field {
        self.current
    }

    /// Writes `value` into `field` if it is the one being edited.
    pub fn edit(&mut self, field: Field, value: String) -> bool {
        if field != self.current {
            return false;
        }
        *self.form.slot(field) = value;
        true
    }

    /// Fields that have been reached so far, in order.
    pub fn visible_fields(&self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().take(self.current as usize + 1)
    }

    pub fn is_frozen(&self, field: Field) -> bool {
        field != self.current
    }

    /// Moves to the next field. On the last field the completed form is
    /// handed back and the wizard starts over.
    pub fn advance(&mut self) -> Option<ContactForm> {
        match self.current.next() {
            Some(next) => {
                self.current = next;
                None
            }
            None => {
                self.current = Field::Name;
                Some(std::mem::take(&mut self.form))
            }
        }
    }
}
