//! MySQL implementation of the GymBookingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gym_core::domain::entities::booking::{GymBooking, Payment, PaymentMethod, WorkoutType};
use gym_core::errors::DomainError;
use gym_core::repositories::GymBookingRepository;

use super::{column_error, parse_uuid, read_error, write_error};

const GYM_BOOKING_COLUMNS: &str = "id, user_id, workout_type, duration, session_date, \
     payment_method, payment_transaction_id, amount, created_at";

const GYM_BOOKING_CONFLICTS: &[(&str, &str, &str)] = &[(
    "uk_gym_bookings_transaction_id",
    "transactionId",
    "A booking already exists for this payment",
)];

/// MySQL implementation of GymBookingRepository
pub struct MySqlGymBookingRepository {
    pool: MySqlPool,
}

impl MySqlGymBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<GymBooking, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let user_id: Option<String> = row
            .try_get("user_id")
            .map_err(|e| column_error("user_id", e))?;
        let workout_type: String = row
            .try_get("workout_type")
            .map_err(|e| column_error("workout_type", e))?;
        let method: String = row
            .try_get("payment_method")
            .map_err(|e| column_error("payment_method", e))?;

        Ok(GymBooking {
            id: parse_uuid("id", &id)?,
            user_id: user_id
                .as_deref()
                .map(|raw| parse_uuid("user_id", raw))
                .transpose()?,
            workout_type: WorkoutType::parse(&workout_type).ok_or_else(|| {
                column_error("workout_type", format!("unknown value {}", workout_type))
            })?,
            duration: row
                .try_get("duration")
                .map_err(|e| column_error("duration", e))?,
            session_date: row
                .try_get::<DateTime<Utc>, _>("session_date")
                .map_err(|e| column_error("session_date", e))?,
            payment: Payment {
                method: PaymentMethod::parse(&method).ok_or_else(|| {
                    column_error("payment_method", format!("unknown value {}", method))
                })?,
                transaction_id: row
                    .try_get("payment_transaction_id")
                    .map_err(|e| column_error("payment_transaction_id", e))?,
                amount: row.try_get("amount").map_err(|e| column_error("amount", e))?,
            },
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
        })
    }
}

#[async_trait]
impl GymBookingRepository for MySqlGymBookingRepository {
    async fn create(&self, booking: GymBooking) -> Result<GymBooking, DomainError> {
        let query = r#"
            INSERT INTO gym_bookings (
                id, user_id, workout_type, duration, session_date,
                payment_method, payment_transaction_id, amount, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.user_id.map(|id| id.to_string()))
            .bind(booking.workout_type.as_str())
            .bind(booking.duration)
            .bind(booking.session_date)
            .bind(booking.payment.method.as_str())
            .bind(&booking.payment.transaction_id)
            .bind(booking.payment.amount)
            .bind(booking.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "create gym booking", GYM_BOOKING_CONFLICTS))?;

        Ok(booking)
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<GymBooking>, DomainError> {
        let query = format!(
            "SELECT {} FROM gym_bookings WHERE payment_transaction_id = ? LIMIT 1",
            GYM_BOOKING_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn list_all(&self) -> Result<Vec<GymBooking>, DomainError> {
        let query = format!(
            "SELECT {} FROM gym_bookings ORDER BY created_at DESC",
            GYM_BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<GymBooking>, DomainError> {
        let query = format!(
            "SELECT {} FROM gym_bookings WHERE user_id = ? ORDER BY created_at DESC",
            GYM_BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)?;

        rows.iter().map(Self::row_to_booking).collect()
    }
}
