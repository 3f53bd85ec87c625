use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// The courier's identity, printed on every report row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub company: String,
    pub vehicle_model: String,
    pub plate: String,
}

impl UserProfile {
    pub fn new(name: &str, company: &str, vehicle_model: &str, plate: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            company: company.trim().to_string(),
            vehicle_model: vehicle_model.trim().to_string(),
            plate: plate.trim().to_uppercase(),
        }
    }

    /// Name and plate are mandatory; the other fields may stay empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidProfile("name must not be empty".into()));
        }
        if self.plate.trim().is_empty() {
            return Err(AppError::InvalidProfile("plate must not be empty".into()));
        }
        Ok(())
    }

    /// One-line summary: "name • model • plate"
    pub fn headline(&self) -> String {
        if self.vehicle_model.is_empty() {
            format!("{} • {}", self.name, self.plate)
        } else {
            format!("{} • {} • {}", self.name, self.vehicle_model, self.plate)
        }
    }
}
