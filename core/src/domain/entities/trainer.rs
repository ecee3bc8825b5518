//! Trainer entity and the input shapes used to create or edit one.

use chrono::{DateTime, Utc};
use gym_shared::validation::validators::{
    is_valid_email, is_valid_time_of_day, length_between, normalize_email, not_empty,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Default rating given to a newly listed trainer
pub const DEFAULT_TRAINER_RATING: f64 = 4.5;

/// Longest allowed trainer bio, in characters
pub const MAX_BIO_LENGTH: usize = 500;

/// Column widths of the trainers table
pub const MAX_TRAINER_NAME_LENGTH: usize = 100;
pub const MAX_TRAINER_EMAIL_LENGTH: usize = 255;

/// Area a trainer coaches in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    #[serde(rename = "Weight Training")]
    WeightTraining,
    Yoga,
    Cardio,
    CrossFit,
    Nutrition,
    #[serde(rename = "zumba")]
    Zumba,
}

impl Specialization {
    /// Wire and storage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::WeightTraining => "Weight Training",
            Specialization::Yoga => "Yoga",
            Specialization::Cardio => "Cardio",
            Specialization::CrossFit => "CrossFit",
            Specialization::Nutrition => "Nutrition",
            Specialization::Zumba => "zumba",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Weight Training" => Some(Specialization::WeightTraining),
            "Yoga" => Some(Specialization::Yoga),
            "Cardio" => Some(Specialization::Cardio),
            "CrossFit" => Some(Specialization::CrossFit),
            "Nutrition" => Some(Specialization::Nutrition),
            "zumba" => Some(Specialization::Zumba),
            _ => None,
        }
    }
}

/// Day of the week a trainer is available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// Daily availability window, `HH:MM` 24-hour strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

/// When a trainer can be booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub days: Vec<Weekday>,
    pub hours: WorkingHours,
}

impl Availability {
    fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_time_of_day(&self.hours.start) {
            return Err(ValidationError::InvalidFormat {
                field: "availability.hours.start".to_string(),
            });
        }
        if !is_valid_time_of_day(&self.hours.end) {
            return Err(ValidationError::InvalidFormat {
                field: "availability.hours.end".to_string(),
            });
        }
        Ok(())
    }

    /// Sorted, de-duplicated copy of the day list
    fn normalized(mut self) -> Self {
        self.days.sort();
        self.days.dedup();
        self
    }
}

/// A trainer listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialization: Specialization,
    /// Years of experience
    pub experience: u32,
    /// Hourly rate
    pub rate: f64,
    pub availability: Availability,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trainer {
    /// Builds a trainer from validated input
    pub fn new(input: NewTrainer) -> Result<Self, ValidationError> {
        input.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            email: normalize_email(&input.email),
            specialization: input.specialization,
            experience: input.experience,
            rate: input.rate,
            availability: input.availability.normalized(),
            rating: input.rating.unwrap_or(DEFAULT_TRAINER_RATING),
            bio: input.bio.map(|b| b.trim().to_string()).filter(|b| !b.is_empty()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial edit; nothing changes if validation fails
    pub fn apply(&mut self, update: TrainerUpdate) -> Result<(), ValidationError> {
        update.validate()?;

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            self.email = normalize_email(&email);
        }
        if let Some(specialization) = update.specialization {
            self.specialization = specialization;
        }
        if let Some(experience) = update.experience {
            self.experience = experience;
        }
        if let Some(rate) = update.rate {
            self.rate = rate;
        }
        if let Some(availability) = update.availability {
            self.availability = availability.normalized();
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(bio) = update.bio {
            let bio = bio.trim().to_string();
            self.bio = if bio.is_empty() { None } else { Some(bio) };
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Input for listing a new trainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrainer {
    pub name: String,
    pub email: String,
    pub specialization: Specialization,
    pub experience: u32,
    pub rate: f64,
    pub availability: Availability,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl NewTrainer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_rate(self.rate)?;
        self.availability.validate()?;
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        if let Some(bio) = &self.bio {
            validate_bio(bio)?;
        }
        Ok(())
    }
}

/// Partial edit of a trainer; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<Specialization>,
    pub experience: Option<u32>,
    pub rate: Option<f64>,
    pub availability: Option<Availability>,
    pub rating: Option<f64>,
    pub bio: Option<String>,
}

impl TrainerUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(rate) = self.rate {
            validate_rate(rate)?;
        }
        if let Some(availability) = &self.availability {
            availability.validate()?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        if let Some(bio) = &self.bio {
            validate_bio(bio)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !not_empty(name) {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }
    if !length_between(name.trim(), 1, MAX_TRAINER_NAME_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "name".to_string(),
            min: 1,
            max: MAX_TRAINER_NAME_LENGTH,
        });
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !length_between(email.trim(), 1, MAX_TRAINER_EMAIL_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "email".to_string(),
            min: 1,
            max: MAX_TRAINER_EMAIL_LENGTH,
        });
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

fn validate_rate(rate: f64) -> Result<(), ValidationError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: "0".to_string(),
            max: "unbounded".to_string(),
        });
    }
    Ok(())
}

fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: "0".to_string(),
            max: "5".to_string(),
        });
    }
    Ok(())
}

fn validate_bio(bio: &str) -> Result<(), ValidationError> {
    if !length_between(bio, 0, MAX_BIO_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "bio".to_string(),
            min: 0,
            max: MAX_BIO_LENGTH,
        });
    }
    Ok(())
}
