//! Planning request input.

use crate::error::PlanError;

/// What the user tells us: where they sail and what they sail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanRequest {
    pub city: String,
    pub region: String,
    pub country: String,
    pub vessel_model: String,
    pub available_sails: String,
}

impl PlanRequest {
    /// Free-text location for geocoding: trimmed, non-empty parts joined
    /// with ", ".
    pub fn location_text(&self) -> String {
        [&self.city, &self.region, &self.country]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Every field must be non-empty after trimming. Location fields are
    /// checked before vessel fields.
    pub fn validate(&self) -> Result<(), PlanError> {
        let fields = [
            (&self.city, "city"),
            (&self.region, "region"),
            (&self.country, "country"),
            (&self.vessel_model, "vessel model"),
            (&self.available_sails, "available sails"),
        ];

        for (value, name) in fields {
            if value.trim().is_empty() {
                return Err(PlanError::InvalidRequest(format!("{} is required", name)));
            }
        }

        Ok(())
    }
}
