//! Driver onboarding form.
//!
//! Same shape as vendor registration: text sections first, then the
//! required document photos, submitted as one multipart request with the
//! nested sections JSON-stringified.

use mango_market_core::ImageUpload;
use reqwest::multipart::Form;

use crate::error::{ApiError, ValidationError};
use crate::types::{PersonalDetails, VehicleDetails};

use super::images::file_part;
use super::validate::{check_uploads, require};

/// The driver onboarding form.
#[derive(Debug, Clone)]
pub struct DriverOnboardingForm {
    pub personal_details: PersonalDetails,
    pub vehicle_details: VehicleDetails,
    /// Licence/registration photos (at least one required).
    pub documents: Vec<ImageUpload>,
}

impl DriverOnboardingForm {
    /// Validate the form, first violation wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("personalDetails.name", &self.personal_details.name)?;
        require("personalDetails.phone", &self.personal_details.phone)?;
        require(
            "vehicleDetails.registrationNumber",
            &self.vehicle_details.registration_number,
        )?;
        if self.documents.is_empty() {
            return Err(ValidationError::new(
                "documents",
                "at least one document photo is required",
            ));
        }
        check_uploads("documents", &self.documents)?;
        Ok(())
    }

    /// Validate and build the multipart submission.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for client-side violations, or
    /// `ApiError::Parse` if a nested section cannot be serialized.
    pub fn into_multipart(self) -> Result<Form, ApiError> {
        self.validate()?;

        let personal = serde_json::to_string(&self.personal_details)
            .map_err(|e| ApiError::Parse(format!("Failed to serialize personalDetails: {e}")))?;
        let vehicle = serde_json::to_string(&self.vehicle_details)
            .map_err(|e| ApiError::Parse(format!("Failed to serialize vehicleDetails: {e}")))?;

        let mut form = Form::new()
            .text("personalDetails", personal)
            .text("vehicleDetails", vehicle);

        for document in self.documents {
            form = form.part("documents", file_part(document)?);
        }
        Ok(form)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> DriverOnboardingForm {
        DriverOnboardingForm {
            personal_details: PersonalDetails {
                name: "Kiran".to_owned(),
                phone: "5550123".to_owned(),
                email: None,
            },
            vehicle_details: VehicleDetails {
                registration_number: "MH12AB1234".to_owned(),
                vehicle_type: Some("bike".to_owned()),
                model: None,
            },
            documents: vec![ImageUpload {
                file_name: "licence.jpg".to_owned(),
                content_type: "image/jpeg".to_owned(),
                bytes: vec![0_u8; 256],
            }],
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_registration_number_required() {
        let mut form = form();
        form.vehicle_details.registration_number = String::new();
        assert_eq!(
            form.validate().unwrap_err().field,
            "vehicleDetails.registrationNumber"
        );
    }

    #[test]
    fn test_documents_required() {
        let mut form = form();
        form.documents.clear();
        assert_eq!(form.validate().unwrap_err().field, "documents");
    }
}
