//! MySQL implementation of the TrainerBookingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gym_core::domain::entities::booking::{BookingStatus, PaymentStatus, TrainerBooking};
use gym_core::errors::DomainError;
use gym_core::repositories::TrainerBookingRepository;

use super::{column_error, parse_uuid, read_error, write_error};

const TRAINER_BOOKING_COLUMNS: &str = "id, user_id, trainer_id, trainer_name, trainer_rate, \
     duration, session_date, amount, status, payment_status, created_at, updated_at";

/// MySQL implementation of TrainerBookingRepository
pub struct MySqlTrainerBookingRepository {
    pool: MySqlPool,
}

impl MySqlTrainerBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<TrainerBooking, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| column_error("user_id", e))?;
        let trainer_id: String = row
            .try_get("trainer_id")
            .map_err(|e| column_error("trainer_id", e))?;
        let status: String = row.try_get("status").map_err(|e| column_error("status", e))?;
        let payment_status: String = row
            .try_get("payment_status")
            .map_err(|e| column_error("payment_status", e))?;

        Ok(TrainerBooking {
            id: parse_uuid("id", &id)?,
            user_id: parse_uuid("user_id", &user_id)?,
            trainer_id: parse_uuid("trainer_id", &trainer_id)?,
            trainer_name: row
                .try_get("trainer_name")
                .map_err(|e| column_error("trainer_name", e))?,
            trainer_rate: row
                .try_get("trainer_rate")
                .map_err(|e| column_error("trainer_rate", e))?,
            duration: row
                .try_get("duration")
                .map_err(|e| column_error("duration", e))?,
            session_date: row
                .try_get::<DateTime<Utc>, _>("session_date")
                .map_err(|e| column_error("session_date", e))?,
            amount: row.try_get("amount").map_err(|e| column_error("amount", e))?,
            status: BookingStatus::parse(&status)
                .ok_or_else(|| column_error("status", format!("unknown value {}", status)))?,
            payment_status: PaymentStatus::parse(&payment_status).ok_or_else(|| {
                column_error("payment_status", format!("unknown value {}", payment_status))
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
        })
    }

    async fn find_for_user(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TrainerBooking>, DomainError> {
        let query = format!(
            "SELECT {} FROM trainer_bookings WHERE id = ? AND user_id = ? LIMIT 1",
            TRAINER_BOOKING_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(booking_id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }
}

#[async_trait]
impl TrainerBookingRepository for MySqlTrainerBookingRepository {
    async fn create_if_trainer_exists(
        &self,
        booking: TrainerBooking,
    ) -> Result<Option<TrainerBooking>, DomainError> {
        // Single statement: no row is inserted unless the trainer row exists
        let query = r#"
            INSERT INTO trainer_bookings (
                id, user_id, trainer_id, trainer_name, trainer_rate,
                duration, session_date, amount, status, payment_status,
                created_at, updated_at
            )
            SELECT ?, ?, t.id, ?, ?, ?, ?, ?, ?, ?, ?, ?
            FROM trainers t
            WHERE t.id = ?
        "#;

        let result = sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.user_id.to_string())
            .bind(&booking.trainer_name)
            .bind(booking.trainer_rate)
            .bind(booking.duration)
            .bind(booking.session_date)
            .bind(booking.amount)
            .bind(booking.status.as_str())
            .bind(booking.payment_status.as_str())
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .bind(booking.trainer_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "create trainer booking", &[]))?;

        if result.rows_affected() == 0 {
            tracing::warn!(
                trainer_id = %booking.trainer_id,
                "Trainer booking not stored: trainer no longer exists"
            );
            return Ok(None);
        }

        Ok(Some(booking))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TrainerBooking>, DomainError> {
        let query = format!(
            "SELECT {} FROM trainer_bookings WHERE id = ? LIMIT 1",
            TRAINER_BOOKING_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn cancel_for_user(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TrainerBooking>, DomainError> {
        // updated_at is assigned first so it still sees the old status
        let query = r#"
            UPDATE trainer_bookings SET
                updated_at = IF(status = ?, updated_at, ?),
                status = ?
            WHERE id = ? AND user_id = ?
        "#;

        let cancelled = BookingStatus::Cancelled.as_str();
        sqlx::query(query)
            .bind(cancelled)
            .bind(Utc::now())
            .bind(cancelled)
            .bind(booking_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "cancel trainer booking", &[]))?;

        self.find_for_user(booking_id, user_id).await
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TrainerBooking>, DomainError> {
        let query = format!(
            "SELECT {} FROM trainer_bookings WHERE user_id = ? ORDER BY created_at DESC",
            TRAINER_BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)?;

        rows.iter().map(Self::row_to_booking).collect()
    }
}
