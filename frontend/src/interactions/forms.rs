use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::error::ValidationError;

/// Field values read from a form at submit time. Logged, then thrown away.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormSubmission(BTreeMap<&'static str, String>);

impl FormSubmission {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

/// Shared shape of the schedule and contact forms.
pub trait Form {
    type Field: Copy + 'static;

    const FIELDS: &'static [Self::Field];
    const REQUIRED: &'static [Self::Field];

    fn field_name(field: Self::Field) -> &'static str;
    fn value(&self, field: Self::Field) -> &str;
    fn value_mut(&mut self, field: Self::Field) -> &mut String;

    fn set(&mut self, field: Self::Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    fn submission(&self) -> FormSubmission {
        FormSubmission(
            Self::FIELDS
                .iter()
                .map(|&field| (Self::field_name(field), self.value(field).to_string()))
                .collect(),
        )
    }

    /// All-or-nothing: one empty required field rejects the whole form.
    fn validate(&self) -> Result<FormSubmission, ValidationError> {
        let missing: Vec<&'static str> = Self::REQUIRED
            .iter()
            .filter(|&&field| self.value(field).is_empty())
            .map(|&field| Self::field_name(field))
            .collect();

        if missing.is_empty() {
            Ok(self.submission())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

/// Value for an `<input type="date">`.
pub fn date_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    Name,
    Phone,
    Address,
    Date,
    Time,
    Service,
    Notes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub notes: String,
}

impl ScheduleForm {
    pub fn new(today: NaiveDate) -> Self {
        ScheduleForm {
            date: date_value(today),
            ..Default::default()
        }
    }

    /// Clears every field and puts the pickup date back on today.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = ScheduleForm::new(today);
    }
}

impl Form for ScheduleForm {
    type Field = ScheduleField;

    const FIELDS: &'static [ScheduleField] = &[
        ScheduleField::Name,
        ScheduleField::Phone,
        ScheduleField::Address,
        ScheduleField::Date,
        ScheduleField::Time,
        ScheduleField::Service,
        ScheduleField::Notes,
    ];
    const REQUIRED: &'static [ScheduleField] = &[
        ScheduleField::Name,
        ScheduleField::Phone,
        ScheduleField::Address,
        ScheduleField::Date,
        ScheduleField::Time,
        ScheduleField::Service,
    ];

    fn field_name(field: ScheduleField) -> &'static str {
        match field {
            ScheduleField::Name => "name",
            ScheduleField::Phone => "phone",
            ScheduleField::Address => "address",
            ScheduleField::Date => "date",
            ScheduleField::Time => "time",
            ScheduleField::Service => "service",
            ScheduleField::Notes => "notes",
        }
    }

    fn value(&self, field: ScheduleField) -> &str {
        match field {
            ScheduleField::Name => &self.name,
            ScheduleField::Phone => &self.phone,
            ScheduleField::Address => &self.address,
            ScheduleField::Date => &self.date,
            ScheduleField::Time => &self.time,
            ScheduleField::Service => &self.service,
            ScheduleField::Notes => &self.notes,
        }
    }

    fn value_mut(&mut self, field: ScheduleField) -> &mut String {
        match field {
            ScheduleField::Name => &mut self.name,
            ScheduleField::Phone => &mut self.phone,
            ScheduleField::Address => &mut self.address,
            ScheduleField::Date => &mut self.date,
            ScheduleField::Time => &mut self.time,
            ScheduleField::Service => &mut self.service,
            ScheduleField::Notes => &mut self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl Form for ContactForm {
    type Field = ContactField;

    const FIELDS: &'static [ContactField] = &[
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];
    // No check on the email's shape beyond being present.
    const REQUIRED: &'static [ContactField] =
        &[ContactField::Name, ContactField::Email, ContactField::Message];

    fn field_name(field: ContactField) -> &'static str {
        match field {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}
