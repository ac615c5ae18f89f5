use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;
use crate::session::LoginRequest;

pub const FIELDS_REQUIRED: &str = "Please fill in all fields";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Form field the login identifier is reported under.
pub const EMAIL_FIELD: &str = "email";

/// Require a `domain.tld` after the `@`; the `email` rule alone accepts
/// single-label hosts. The server stays authoritative.
pub fn has_dotted_domain(value: &str) -> Result<(), ValidationError> {
    let dotted = value.rsplit_once('@').is_some_and(|(_, domain)| {
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    });
    if dotted {
        return Ok(());
    }
    let mut err = ValidationError::new("email_domain");
    err.message = Some(Cow::Borrowed(INVALID_EMAIL));
    Err(err)
}

fn has_missing_field(errors: &ValidationErrors) -> bool {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .any(|e| e.code == "length")
}

/// Validate the sign-in form and build the request body.
///
/// An empty field wins over a malformed identifier.
pub fn validate_login(identifier: &str, secret: &str) -> Result<LoginRequest, AppError> {
    let request = LoginRequest {
        login_id: identifier.to_string(),
        password_or_otp: secret.to_string(),
    };
    let Err(errors) = request.validate() else {
        return Ok(request);
    };
    if has_missing_field(&errors) {
        return Err(AppError::validation(FIELDS_REQUIRED));
    }

    let mut err = AppError::from(errors);
    if let Some(message) = err.field_errors.remove("login_id") {
        err.field_errors.insert(EMAIL_FIELD.to_string(), message.clone());
        err.message = message;
    }
    Err(err)
}
