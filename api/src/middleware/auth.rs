//! JWT authentication middleware for protecting API endpoints.
//!
//! The access token is taken from the `Authorization: Bearer` header or,
//! failing that, from the session cookie. Verification goes through the
//! core `TokenService` registered as app data, and the resulting
//! `AuthContext` is injected into the request extensions.
//!
//! The middleware works in two modes:
//! 1. Required: requests without a valid token are answered with 401
//! 2. Optional: such requests continue anonymously

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use gym_core::{
    domain::entities::token::Claims,
    errors::{DomainError, TokenError},
    services::TokenService,
};
use gym_shared::config::SessionConfig;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::handlers::error::domain_error_body;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// Display name at the time the token was issued
    pub name: String,
    /// Email at the time the token was issued
    pub email: String,
    /// JWT ID for tracking
    pub jti: String,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        Ok(Self {
            user_id,
            name: claims.name,
            email: claims.email,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    /// Let requests through without a context instead of rejecting them
    optional: bool,
}

impl JwtAuth {
    /// Creates a middleware that rejects unauthenticated requests
    pub fn new() -> Self {
        Self { optional: false }
    }

    /// Creates a middleware that attaches a context when a valid token is present
    pub fn optional() -> Self {
        Self { optional: true }
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            optional: self.optional,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    optional: bool,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let optional = self.optional;

        Box::pin(async move {
            match authenticate(req.request()) {
                Ok(auth_context) => {
                    req.extensions_mut().insert(auth_context);
                }
                Err(error) if optional => {
                    log::debug!("Continuing without authentication: {}", error);
                }
                Err(error) => {
                    let response = auth_error_response(&error);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Verify the request's access token and build its context
fn authenticate(req: &HttpRequest) -> Result<AuthContext, DomainError> {
    let cookie_name = req
        .app_data::<web::Data<SessionConfig>>()
        .map(|session| session.cookie_name.clone())
        .unwrap_or_else(|| SessionConfig::default().cookie_name);

    let token = extract_token(req, &cookie_name).ok_or(TokenError::MissingToken)?;

    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| DomainError::internal("JWT verification not configured"))?;

    let claims = token_service.verify_access_token(&token)?;
    AuthContext::from_claims(claims)
}

/// Extracts the access token, preferring the Authorization header over the cookie
pub fn extract_token(req: &HttpRequest, cookie_name: &str) -> Option<String> {
    extract_bearer_token(req).or_else(|| {
        req.cookie(cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// JSON error response for a verification failure
fn auth_error_response(error: &DomainError) -> HttpResponse {
    let (status, body) = domain_error_body(error);
    HttpResponse::build(status).json(body)
}

fn auth_error(error: DomainError) -> Error {
    let response = auth_error_response(&error);
    InternalError::from_response(error, response).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| auth_error(TokenError::MissingToken.into()));

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
