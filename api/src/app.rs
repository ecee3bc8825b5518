//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use gym_core::errors::DomainError;
use gym_core::repositories::{
    GymBookingRepository, TrainerBookingRepository, TrainerRepository, UserRepository,
};
use gym_core::services::{
    AuthService, AuthServiceConfig, BookingService, BookingServiceConfig, PasswordHasher,
    TokenService, TokenServiceConfig, TrainerService, TransactionService,
};
use gym_shared::config::{AppConfig, CorsConfig, SessionConfig};
use gym_shared::{error_codes, ErrorResponse};

use crate::handlers::{json_error_handler, path_error_handler};
use crate::middleware::{admin::AdminGuard, auth::JwtAuth, cors::create_cors};
use crate::routes::{auth, bookings, trainers, user};

/// Application state that holds shared services
pub struct AppState<U, T, G, B>
where
    U: UserRepository,
    T: TrainerRepository,
    G: GymBookingRepository,
    B: TrainerBookingRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub trainer_service: Arc<TrainerService<T>>,
    pub booking_service: Arc<BookingService<U, T, G, B>>,
    pub transaction_service: Arc<TransactionService<G, B>>,
    pub token_service: Arc<TokenService>,
    /// Session cookie names and flags
    pub session: SessionConfig,
    /// Key required by administrative endpoints
    pub admin_api_key: Option<String>,
    pub cors: CorsConfig,
    /// JSON body limit in bytes
    pub max_payload_size: usize,
}

impl<U, T, G, B> AppState<U, T, G, B>
where
    U: UserRepository,
    T: TrainerRepository,
    G: GymBookingRepository,
    B: TrainerBookingRepository,
{
    /// Wire the services on top of the given repositories
    ///
    /// # Arguments
    ///
    /// * `users` - Member accounts
    /// * `trainers` - Trainer directory
    /// * `gym_bookings` - Gym session bookings
    /// * `trainer_bookings` - Trainer session bookings
    /// * `config` - Loaded application configuration
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Internal)` - The bcrypt cost is out of range
    pub fn new(
        users: Arc<U>,
        trainers: Arc<T>,
        gym_bookings: Arc<G>,
        trainer_bookings: Arc<B>,
        config: &AppConfig,
    ) -> Result<Self, DomainError> {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
        let password_hasher = Arc::new(PasswordHasher::new(config.auth.bcrypt_cost)?);

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&token_service),
            password_hasher,
            AuthServiceConfig::default(),
        ));
        let trainer_service = Arc::new(TrainerService::new(Arc::clone(&trainers)));
        let booking_service = Arc::new(BookingService::new(
            users,
            trainers,
            Arc::clone(&gym_bookings),
            Arc::clone(&trainer_bookings),
            BookingServiceConfig::from(&config.booking),
        ));
        let transaction_service =
            Arc::new(TransactionService::new(gym_bookings, trainer_bookings));

        Ok(Self {
            auth_service,
            trainer_service,
            booking_service,
            transaction_service,
            token_service,
            session: config.auth.session.clone(),
            admin_api_key: config.auth.admin_api_key.clone(),
            cors: config.cors.clone(),
            max_payload_size: config.server.max_payload_size,
        })
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T, G, B>(
    app_state: web::Data<AppState<U, T, G, B>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TrainerRepository + 'static,
    G: GymBookingRepository + 'static,
    B: TrainerBookingRepository + 'static,
{
    let cors = create_cors(&app_state.cors);
    let admin = AdminGuard::new(app_state.admin_api_key.clone());

    // The auth middleware looks these up without knowing the repository types
    let token_service = web::Data::from(Arc::clone(&app_state.token_service));
    let session = web::Data::new(app_state.session.clone());

    let json_config = web::JsonConfig::default()
        .limit(app_state.max_payload_size)
        .error_handler(json_error_handler);
    let path_config = web::PathConfig::default().error_handler(path_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(token_service)
        .app_data(session)
        .app_data(json_config)
        .app_data(path_config)
        // Add middleware (CORS runs first, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/user")
                        .route("/signup", web::post().to(user::signup::signup::<U, T, G, B>))
                        .route("/signin", web::post().to(user::signin::signin::<U, T, G, B>))
                        .route("/logout", web::post().to(user::logout::logout::<U, T, G, B>))
                        .route(
                            "/me",
                            web::get()
                                .to(user::profile::me::<U, T, G, B>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/update-phone",
                            web::put()
                                .to(user::profile::update_phone::<U, T, G, B>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/change-password",
                            web::put()
                                .to(user::profile::change_password::<U, T, G, B>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/delete-account/{id}",
                            web::delete()
                                .to(user::profile::delete_account::<U, T, G, B>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/transactions",
                            web::get()
                                .to(user::transactions::transactions::<U, T, G, B>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/all",
                            web::get()
                                .to(user::admin::list_users::<U, T, G, B>)
                                .wrap(admin.clone()),
                        ),
                )
                .service(
                    web::scope("/auth").route(
                        "/refresh-token",
                        web::post().to(auth::refresh::refresh_token::<U, T, G, B>),
                    ),
                )
                .service(
                    web::scope("/trainers")
                        .route("", web::get().to(trainers::directory::list::<U, T, G, B>))
                        .route(
                            "",
                            web::post()
                                .to(trainers::manage::create::<U, T, G, B>)
                                .wrap(admin.clone()),
                        )
                        .route(
                            "",
                            web::delete()
                                .to(trainers::manage::delete_all::<U, T, G, B>)
                                .wrap(admin.clone()),
                        )
                        .route(
                            "/bookings/{id}/cancel",
                            web::patch()
                                .to(trainers::booking::cancel::<U, T, G, B>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/{id}/book",
                            web::post()
                                .to(trainers::booking::book::<U, T, G, B>)
                                .wrap(JwtAuth::new()),
                        )
                        .route("/{id}", web::get().to(trainers::directory::get::<U, T, G, B>))
                        .route(
                            "/{id}",
                            web::put()
                                .to(trainers::manage::update::<U, T, G, B>)
                                .wrap(admin.clone()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(trainers::manage::delete::<U, T, G, B>)
                                .wrap(admin.clone()),
                        ),
                )
                .service(
                    web::scope("/bookings")
                        .route(
                            "/gym",
                            web::post()
                                .to(bookings::gym::book_gym::<U, T, G, B>)
                                .wrap(JwtAuth::optional()),
                        )
                        .route(
                            "/gym",
                            web::get()
                                .to(bookings::gym::list_gym::<U, T, G, B>)
                                .wrap(admin),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "gymflow-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
