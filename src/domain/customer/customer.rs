use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use serde_json::Value;

use super::validation::{validated_fields, ValidationError};

/// A row of the `clientes` table
///
/// Serialized with the column names, so the JSON shape matches the table.
/// Rows are returned as stored: field rules are only enforced on write, so
/// `name` and `email` may be NULL if the table was edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Customer {
    pub id: u64,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    #[sqlx(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "data_nascimento")]
    #[sqlx(rename = "data_nascimento")]
    pub birth_date: Option<NaiveDate>,
}

/// Validated field set written on create and update
///
/// # Invariants
/// - `name` has at least two characters after trimming
/// - `email` contains both `@` and `.`
/// - Empty `phone` and `birth_date` inputs are stored as `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerData {
    name: String,
    email: String,
    phone: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl CustomerData {
    /// Validates loosely-typed request input into a writable record
    ///
    /// # Arguments
    /// * `name` - Raw `nome` value, any JSON type
    /// * `email` - Raw `email` value, any JSON type
    /// * `phone` - Optional phone, empty string treated as absent
    /// * `birth_date` - Optional `YYYY-MM-DD` date or RFC 3339 timestamp
    ///
    /// # Returns
    /// * `Ok(CustomerData)` - If every field is acceptable
    /// * `Err(ValidationError)` - The first rule that failed
    pub fn new(
        name: Option<&Value>,
        email: Option<&Value>,
        phone: Option<String>,
        birth_date: Option<String>,
    ) -> Result<Self, ValidationError> {
        let (name, email) = validated_fields(name, email)?;

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.filter(|phone| !phone.is_empty()),
            birth_date: parse_birth_date(birth_date.as_deref())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }
}

fn parse_birth_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| Some(timestamp.date_naive()))
        .map_err(|_| ValidationError::InvalidBirthDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(phone: Option<&str>, birth_date: Option<&str>) -> Result<CustomerData, ValidationError> {
        CustomerData::new(
            Some(&json!("Ana Silva")),
            Some(&json!("ana@example.com")),
            phone.map(str::to_string),
            birth_date.map(str::to_string),
        )
    }

    #[test]
    fn create_with_required_fields_only() {
        let data = data(None, None).unwrap();

        assert_eq!(data.name(), "Ana Silva");
        assert_eq!(data.email(), "ana@example.com");
        assert_eq!(data.phone(), None);
        assert_eq!(data.birth_date(), None);
    }

    #[test]
    fn name_is_stored_untrimmed() {
        let data = CustomerData::new(
            Some(&json!(" Ana ")),
            Some(&json!("ana@example.com")),
            None,
            None,
        )
        .unwrap();

        assert_eq!(data.name(), " Ana ");
    }

    #[test]
    fn empty_phone_becomes_none() {
        assert_eq!(data(Some(""), None).unwrap().phone(), None);
        assert_eq!(data(Some("11 99999-0000"), None).unwrap().phone(), Some("11 99999-0000"));
    }

    #[test]
    fn empty_birth_date_becomes_none() {
        assert_eq!(data(None, Some("")).unwrap().birth_date(), None);
    }

    #[test]
    fn birth_date_plain_date() {
        let expected = NaiveDate::from_ymd_opt(1990, 5, 1);
        assert_eq!(data(None, Some("1990-05-01")).unwrap().birth_date(), expected);
    }

    #[test]
    fn birth_date_timestamp_keeps_date_part() {
        let expected = NaiveDate::from_ymd_opt(1990, 5, 1);
        assert_eq!(
            data(None, Some("1990-05-01T00:00:00.000Z")).unwrap().birth_date(),
            expected
        );
    }

    #[test]
    fn invalid_birth_date_fails() {
        assert_eq!(
            data(None, Some("01/05/1990")),
            Err(ValidationError::InvalidBirthDate)
        );
        assert_eq!(
            data(None, Some("1990-13-40")),
            Err(ValidationError::InvalidBirthDate)
        );
    }

    #[test]
    fn validation_runs_before_optional_fields() {
        let result = CustomerData::new(Some(&json!("A")), Some(&json!("a@b.c")), None, Some("bad".into()));
        assert_eq!(result, Err(ValidationError::InvalidName));
    }

    #[test]
    fn customer_serializes_with_column_names() {
        let customer = Customer {
            id: 3,
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            phone: None,
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 31),
        };

        assert_eq!(
            serde_json::to_value(&customer).unwrap(),
            json!({
                "id": 3,
                "nome": "Ana",
                "email": "ana@example.com",
                "telefone": null,
                "data_nascimento": "2000-01-31"
            })
        );
    }

    #[test]
    fn customer_with_null_fields_serializes_as_null() {
        let customer = Customer {
            id: 4,
            name: None,
            email: None,
            phone: None,
            birth_date: None,
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["id"], 4);
        assert!(value["nome"].is_null());
        assert!(value["email"].is_null());
    }
}
