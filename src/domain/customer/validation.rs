use serde_json::Value;
use thiserror::Error;

/// Minimum number of characters a customer name must have after trimming
pub const MIN_NAME_LENGTH: usize = 2;

/// Client-caused input errors, detected before any database call
///
/// The display text of each variant is the message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Nome é obrigatório (mínimo 2 letras).")]
    InvalidName,

    #[error("Email inválido.")]
    InvalidEmail,

    #[error("ID inválido.")]
    InvalidId,

    #[error("Data de nascimento inválida.")]
    InvalidBirthDate,

    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),
}

/// Checks the `name` and `email` of a candidate customer
///
/// Both values come straight from the request body, so they may be absent or
/// of any JSON type. The email is checked first: an email without `@` or `.`
/// is always reported as [`ValidationError::InvalidEmail`].
///
/// # Example
/// ```
/// use clientes_api::domain::customer::validation::{validate_customer, ValidationError};
/// use serde_json::json;
///
/// let name = json!("Ana Silva");
/// let email = json!("ana@example.com");
/// assert!(validate_customer(Some(&name), Some(&email)).is_ok());
///
/// let short = json!("A");
/// assert_eq!(
///     validate_customer(Some(&short), Some(&email)),
///     Err(ValidationError::InvalidName)
/// );
/// ```
pub fn validate_customer(name: Option<&Value>, email: Option<&Value>) -> Result<(), ValidationError> {
    validated_fields(name, email).map(|_| ())
}

/// Same checks as [`validate_customer`], returning the accepted strings
pub(crate) fn validated_fields<'a>(
    name: Option<&'a Value>,
    email: Option<&'a Value>,
) -> Result<(&'a str, &'a str), ValidationError> {
    let email = email
        .and_then(Value::as_str)
        .filter(|email| is_valid_email(email))
        .ok_or(ValidationError::InvalidEmail)?;

    let name = name
        .and_then(Value::as_str)
        .filter(|name| is_valid_name(name))
        .ok_or(ValidationError::InvalidName)?;

    Ok((name, email))
}

fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LENGTH
}

// No ordering between '@' and '.' is required.
fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
