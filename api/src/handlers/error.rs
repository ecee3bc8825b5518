//! Conversion of domain and request errors into JSON responses
//!
//! Every failure leaves the API as a `gym_shared::ErrorResponse` body with
//! the status code of its error category.

use std::collections::BTreeMap;

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use gym_core::errors::{AuthError, DomainError, ErrorCategory, TokenError, ValidationError};
use gym_shared::{error_codes, ErrorResponse};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Message returned in place of internal error details
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Build a JSON error response
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, body) = domain_error_body(&error);
    HttpResponse::build(status).json(body)
}

/// Status and body for a domain error
///
/// Internal errors are logged in full and answered with a fixed message.
pub fn domain_error_body(error: &DomainError) -> (StatusCode, ErrorResponse) {
    match error.category() {
        ErrorCategory::Validation => {
            log::debug!("Validation failed: {}", error);
            let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string());
            let body = match validation_field(error) {
                Some(field) => body.add_detail("field", field),
                None => body,
            };
            (StatusCode::BAD_REQUEST, body)
        }
        ErrorCategory::Unauthorized => {
            log::warn!("Unauthorized request: {}", error);
            (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(unauthorized_code(error), error.to_string()),
            )
        }
        ErrorCategory::Forbidden => {
            log::warn!("Forbidden request: {}", error);
            (
                StatusCode::FORBIDDEN,
                ErrorResponse::new(error_codes::FORBIDDEN, forbidden_message(error)),
            )
        }
        ErrorCategory::NotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::NOT_FOUND, error.to_string()),
        ),
        ErrorCategory::Conflict => {
            let body = ErrorResponse::new(error_codes::CONFLICT, error.to_string());
            let body = match conflict_field(error) {
                Some(field) => body.add_detail("field", field),
                None => body,
            };
            (StatusCode::CONFLICT, body)
        }
        ErrorCategory::Internal => {
            log::error!("Internal error: {:?}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error_codes::INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE),
            )
        }
    }
}

fn unauthorized_code(error: &DomainError) -> &'static str {
    match error {
        DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
        DomainError::Token(TokenError::MissingToken) => error_codes::UNAUTHORIZED,
        DomainError::Token(_) => error_codes::TOKEN_INVALID,
        DomainError::Auth(AuthError::InvalidCredentials) => error_codes::INVALID_CREDENTIALS,
        _ => error_codes::UNAUTHORIZED,
    }
}

fn forbidden_message(error: &DomainError) -> String {
    match error {
        DomainError::Forbidden { message } => message.clone(),
        other => other.to_string(),
    }
}

fn validation_field(error: &DomainError) -> Option<String> {
    match error {
        DomainError::ValidationErr(inner) => inner.field().map(String::from),
        _ => None,
    }
}

fn conflict_field(error: &DomainError) -> Option<String> {
    match error {
        DomainError::Conflict { field, .. } => Some(field.clone()),
        DomainError::Auth(AuthError::EmailAlreadyRegistered) => Some("email".to_string()),
        DomainError::Auth(AuthError::PhoneAlreadyRegistered) => Some("phoneNumber".to_string()),
        _ => None,
    }
}

/// Answer a request body that failed `validator` checks
///
/// Field messages are collected under `details.fields`, nested structs
/// using dotted paths (`payment.transactionId`).
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut fields = BTreeMap::new();
    collect_field_errors("", &errors, &mut fields);
    log::debug!("Request validation failed: {:?}", fields);

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields),
    )
}

fn collect_field_errors(
    prefix: &str,
    errors: &ValidationErrors,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = list
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.insert(path, messages);
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

/// Malformed or mistyped JSON bodies become 400 responses
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let (status, message) = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large".to_string())
        }
        JsonPayloadError::ContentType => (
            StatusCode::BAD_REQUEST,
            "Content-Type must be application/json".to_string(),
        ),
        JsonPayloadError::Deserialize(inner) => {
            (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", inner))
        }
        other => (StatusCode::BAD_REQUEST, other.to_string()),
    };
    log::debug!("Rejected JSON payload: {}", err);

    let response = error_response(status, error_codes::VALIDATION_ERROR, message);
    InternalError::from_response(err, response).into()
}

/// Path parameters that do not parse (e.g. a malformed id) become 400 responses
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let error: DomainError = ValidationError::InvalidFormat {
        field: "id".to_string(),
    }
    .into();
    let response = handle_domain_error(error);
    InternalError::from_response(err, response).into()
}
