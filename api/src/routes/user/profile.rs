//! Handlers for the authenticated member's own account

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};
use gym_shared::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::{
    ChangePasswordRequest, MessageResponse, PhoneUpdatedResponse, ProfileResponse,
    UpdatePhoneRequest,
};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::session::cleared_cookies;

/// Handler for GET /api/user/me
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "username": "Asha Rai", "email": "asha@example.com", "phone": "9876543210" }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: The account was deleted after the token was issued
pub async fn me<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    match state.auth_service.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/user/update-phone
pub async fn update_phone<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    auth: AuthContext,
    request: web::Json<UpdatePhoneRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .update_phone(auth.user_id, &request.phone)
        .await
    {
        Ok(user) => {
            log::info!(
                "Phone number updated for {} to {}",
                user.id,
                mask_phone_number(&user.phone_number)
            );
            HttpResponse::Ok().json(PhoneUpdatedResponse {
                message: "Phone number updated successfully".to_string(),
                phone: user.phone_number,
            })
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/user/change-password
///
/// ## Errors
/// - 400 Bad Request: The new password does not meet the length rule
/// - 401 Unauthorized: The current password is wrong
pub async fn change_password<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .change_password(auth.user_id, &request.current_password, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password changed successfully")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/user/delete-account/{id}
///
/// Members can only delete their own account; the session cookies are
/// cleared on success.
///
/// ## Errors
/// - 403 Forbidden: `{id}` is not the caller's account
/// - 404 Not Found: The account no longer exists
pub async fn delete_account<U, T, G, B>(
    state: web::Data<AppState<U, T, G, B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    let target_id = path.into_inner();

    match state
        .auth_service
        .delete_account(auth.user_id, target_id)
        .await
    {
        Ok(()) => {
            let (access, refresh) = cleared_cookies(&state.session);
            HttpResponse::Ok()
                .cookie(access)
                .cookie(refresh)
                .json(MessageResponse::new("Account deleted successfully"))
        }
        Err(error) => handle_domain_error(error),
    }
}
