use serde::{Deserialize, Deserializer, Serialize};

use roster_core::{Field, FieldErrors, PersonId};

use crate::validation;

/// A stored person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Person data without an id (create payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Person {
    pub fn with_id(id: PersonId, data: NewPerson) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            address: data.address,
        }
    }

    /// Everything but the id.
    pub fn details(&self) -> NewPerson {
        NewPerson {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw, unvalidated form input.
///
/// Every field is a plain string; optional fields are empty when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub address: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PersonForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Address => self.address = value,
        }
    }

    /// Run every field rule, collecting all failures.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validation::validate(self)
    }

    /// Trim values and drop empty optional fields.
    ///
    /// Does not validate; see [`PersonForm::to_new_person`].
    pub fn normalize(&self) -> NewPerson {
        NewPerson {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_empty(&self.phone),
            address: non_empty(&self.address),
        }
    }

    /// Validate, then normalize.
    pub fn to_new_person(&self) -> Result<NewPerson, FieldErrors> {
        self.validate()?;
        Ok(self.normalize())
    }
}

impl From<&Person> for PersonForm {
    fn from(person: &Person) -> Self {
        PersonForm::from(&person.details())
    }
}

impl From<&NewPerson> for PersonForm {
    fn from(data: &NewPerson) -> Self {
        Self {
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone().unwrap_or_default(),
            address: data.address.clone().unwrap_or_default(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_payload_tolerates_missing_and_null_fields() {
        let form: PersonForm =
            serde_json::from_str(r#"{"lastName":"Lee","email":"foo","phone":null}"#).unwrap();
        assert_eq!(form.first_name, "");
        assert_eq!(form.phone, "");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
        assert!(!errors.contains(Field::Phone));
    }

    fn ann() -> PersonForm {
        PersonForm {
            first_name: "  Ann ".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone: "   ".to_string(),
            address: String::new(),
        }
    }

    #[test]
    fn normalize_trims_and_omits_empty_optionals() {
        let data = ann().normalize();
        assert_eq!(data.first_name, "Ann");
        assert_eq!(data.last_name, "Lee");
        assert_eq!(data.email, "ann@x.com");
        assert_eq!(data.phone, None);
        assert_eq!(data.address, None);
    }

    #[test]
    fn normalize_keeps_trimmed_optionals() {
        let mut form = ann();
        form.phone = " +1-555-0123 ".to_string();
        form.address = " 1 Elm St ".to_string();
        let data = form.normalize();
        assert_eq!(data.phone.as_deref(), Some("+1-555-0123"));
        assert_eq!(data.address.as_deref(), Some("1 Elm St"));
    }

    #[test]
    fn to_new_person_rejects_invalid_form() {
        let mut form = ann();
        form.email = "foo".to_string();
        let errors = form.to_new_person().unwrap_err();
        assert!(errors.contains(Field::Email));
    }

    #[test]
    fn form_from_person_fills_missing_optionals_with_empty() {
        let person = Person::with_id(PersonId::new(3), ann().normalize());
        let form = PersonForm::from(&person);
        assert_eq!(form.first_name, "Ann");
        assert_eq!(form.phone, "");
        assert_eq!(form.address, "");
    }

    #[test]
    fn get_and_set_address_every_field() {
        let mut form = PersonForm::default();
        for field in Field::ALL {
            form.set(field, field.as_str());
        }
        for field in Field::ALL {
            assert_eq!(form.get(field), field.as_str());
        }
    }

    #[test]
    fn person_json_uses_camel_case_and_omits_missing_optionals() {
        let person = Person::with_id(PersonId::new(1), ann().normalize());
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "firstName": "Ann", "lastName": "Lee", "email": "ann@x.com"})
        );

        let parsed: NewPerson = serde_json::from_value(serde_json::json!({
            "firstName": "Bo", "lastName": "Ng", "email": "bo@ng.io", "phone": null
        }))
        .unwrap();
        assert_eq!(parsed.phone, None);
        assert_eq!(parsed.address, None);
    }
}
