//! Personal identity shared by students and teachers.
//!
//! [`Person`] holds the fields; [`Identity`] is the capability both entity
//! kinds expose on top of it (age, display form, identity-code check).

use chrono::{Datelike, Local, NaiveDate};
use registrar_core::{AppResult, not_blank};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identity fields of a person. Mutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    /// National identity code. Treated as unique, not enforced.
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    /// Free text, stored as given.
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// DTO for creating a student or teacher.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewPerson {
    #[validate(custom(function = "not_blank"))]
    pub code: String,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewPerson {
    pub fn new(
        code: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: None,
            email: None,
            phone: None,
        }
    }

    pub fn born(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Checks the identity fields and builds the [`Person`].
    pub fn into_person(self) -> AppResult<Person> {
        self.validate()?;

        Ok(Person {
            code: self.code,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            email: self.email,
            phone: self.phone,
        })
    }
}

/// Whole years between `born` and `today`, one less if this year's birthday
/// has not happened yet. Birth dates in the future count as age 0.
pub fn age_between(born: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    u32::try_from(age).unwrap_or(0)
}

/// Shallow identity-code check: not blank, and at least two characters once
/// dots and dashes are stripped. No checksum is computed.
pub fn validate_identity_code(code: &str) -> bool {
    if code.trim().is_empty() {
        return false;
    }
    code.chars().filter(|c| !matches!(c, '.' | '-')).count() >= 2
}

/// Identity capability implemented by students and teachers.
pub trait Identity {
    fn person(&self) -> &Person;

    fn code(&self) -> &str {
        &self.person().code
    }

    fn full_name(&self) -> String {
        let person = self.person();
        format!("{} {}", person.first_name, person.last_name)
    }

    /// `"{given} {family} ({code})"`
    fn display_name(&self) -> String {
        format!("{} ({})", self.full_name(), self.code())
    }

    /// Age on `today`, or `None` when no birth date is recorded.
    fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.person()
            .birth_date
            .map(|born| age_between(born, today))
    }

    /// Age as of the local current date.
    fn age(&self) -> Option<u32> {
        self.age_on(Local::now().date_naive())
    }

    fn validate_identity_code(&self) -> bool {
        validate_identity_code(self.code())
    }
}

impl Identity for Person {
    fn person(&self) -> &Person {
        self
    }
}
