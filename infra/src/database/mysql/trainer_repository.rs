//! MySQL implementation of the TrainerRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gym_core::domain::entities::trainer::{Availability, Specialization, Trainer};
use gym_core::errors::DomainError;
use gym_core::repositories::TrainerRepository;

use super::{column_error, parse_uuid, read_error, write_error};

const TRAINER_COLUMNS: &str = "id, name, email, specialization, experience, rate, \
     availability, rating, bio, created_at, updated_at";

const TRAINER_CONFLICTS: &[(&str, &str, &str)] = &[(
    "uk_trainers_email",
    "email",
    "Trainer email is already registered",
)];

/// MySQL implementation of TrainerRepository
///
/// Availability is stored as a JSON document in a text column.
pub struct MySqlTrainerRepository {
    pool: MySqlPool,
}

impl MySqlTrainerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_trainer(row: &sqlx::mysql::MySqlRow) -> Result<Trainer, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let specialization: String = row
            .try_get("specialization")
            .map_err(|e| column_error("specialization", e))?;
        let availability: String = row
            .try_get("availability")
            .map_err(|e| column_error("availability", e))?;

        Ok(Trainer {
            id: parse_uuid("id", &id)?,
            name: row.try_get("name").map_err(|e| column_error("name", e))?,
            email: row.try_get("email").map_err(|e| column_error("email", e))?,
            specialization: Specialization::parse(&specialization).ok_or_else(|| {
                column_error("specialization", format!("unknown value {}", specialization))
            })?,
            experience: row
                .try_get("experience")
                .map_err(|e| column_error("experience", e))?,
            rate: row.try_get("rate").map_err(|e| column_error("rate", e))?,
            availability: serde_json::from_str::<Availability>(&availability)
                .map_err(|e| column_error("availability", e))?,
            rating: row.try_get("rating").map_err(|e| column_error("rating", e))?,
            bio: row.try_get("bio").map_err(|e| column_error("bio", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
        })
    }

    fn availability_json(trainer: &Trainer) -> Result<String, DomainError> {
        serde_json::to_string(&trainer.availability)
            .map_err(|e| DomainError::internal(format!("Failed to encode availability: {}", e)))
    }
}

#[async_trait]
impl TrainerRepository for MySqlTrainerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Trainer>, DomainError> {
        let query = format!("SELECT {} FROM trainers WHERE id = ? LIMIT 1", TRAINER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        row.as_ref().map(Self::row_to_trainer).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Trainer>, DomainError> {
        let query = format!(
            "SELECT {} FROM trainers WHERE email = ? LIMIT 1",
            TRAINER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        row.as_ref().map(Self::row_to_trainer).transpose()
    }

    async fn list(&self) -> Result<Vec<Trainer>, DomainError> {
        let query = format!("SELECT {} FROM trainers ORDER BY name ASC", TRAINER_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)?;

        rows.iter().map(Self::row_to_trainer).collect()
    }

    async fn create(&self, trainer: Trainer) -> Result<Trainer, DomainError> {
        let query = r#"
            INSERT INTO trainers (
                id, name, email, specialization, experience, rate,
                availability, rating, bio, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(trainer.id.to_string())
            .bind(&trainer.name)
            .bind(&trainer.email)
            .bind(trainer.specialization.as_str())
            .bind(trainer.experience)
            .bind(trainer.rate)
            .bind(Self::availability_json(&trainer)?)
            .bind(trainer.rating)
            .bind(&trainer.bio)
            .bind(trainer.created_at)
            .bind(trainer.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "create trainer", TRAINER_CONFLICTS))?;

        Ok(trainer)
    }

    async fn update(&self, trainer: Trainer) -> Result<Trainer, DomainError> {
        let query = r#"
            UPDATE trainers SET
                name = ?,
                email = ?,
                specialization = ?,
                experience = ?,
                rate = ?,
                availability = ?,
                rating = ?,
                bio = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&trainer.name)
            .bind(&trainer.email)
            .bind(trainer.specialization.as_str())
            .bind(trainer.experience)
            .bind(trainer.rate)
            .bind(Self::availability_json(&trainer)?)
            .bind(trainer.rating)
            .bind(&trainer.bio)
            .bind(trainer.updated_at)
            .bind(trainer.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "update trainer", TRAINER_CONFLICTS))?;

        if result.rows_affected() == 0 && self.find_by_id(trainer.id).await?.is_none() {
            return Err(DomainError::not_found("Trainer"));
        }

        Ok(trainer)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "delete trainer", &[]))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM trainers")
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "delete trainers", &[]))?;

        Ok(result.rows_affected())
    }
}
