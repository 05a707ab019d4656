//! Vendor registration form.
//!
//! Multi-section onboarding: identity, shop details, geocoded address,
//! payout details, then the required document photos and the camera selfie.
//! Validation is sequential (first violation wins); only a fully valid form
//! produces a network payload. Nested sections are JSON-stringified into
//! their own multipart parts alongside the raw file parts, which is the
//! shape the backend's multipart parser expects.

use mango_market_core::ImageUpload;
use reqwest::multipart::Form;

use crate::error::{ApiError, ValidationError};
use crate::types::{BankDetails, Location, UpiDetails, VendorInfo};

use super::images::file_part;
use super::validate::{check_upload, check_uploads, require, require_email};

/// Minimum accepted password length.
const MIN_PASSWORD_CHARS: usize = 8;

/// The vendor registration form.
#[derive(Debug, Clone)]
pub struct VendorSignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub vendor_info: VendorInfo,
    pub location: Location,
    pub bank_details: Option<BankDetails>,
    pub upi_details: Option<UpiDetails>,
    /// Identity/business document photos (at least one required).
    pub documents: Vec<ImageUpload>,
    /// Camera-captured selfie (required).
    pub selfie: Option<ImageUpload>,
}

impl VendorSignupForm {
    /// Validate the form, first violation wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_email("email", &self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::new(
                "password",
                format!("must be at least {MIN_PASSWORD_CHARS} characters"),
            ));
        }
        require("phone", &self.phone)?;
        require("vendorInfo.shopName", &self.vendor_info.shop_name)?;
        require("location.address.city", &self.location.address.city)?;
        if self.documents.is_empty() {
            return Err(ValidationError::new(
                "documents",
                "at least one document photo is required",
            ));
        }
        check_uploads("documents", &self.documents)?;
        let Some(selfie) = &self.selfie else {
            return Err(ValidationError::new("selfie", "a selfie photo is required"));
        };
        check_upload("selfie", selfie)?;
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

        let mut form = Form::new()
            .text("name", self.name)
            .text("email", self.email)
            .text("password", self.password)
            .text("phone", self.phone)
            .text("vendorInfo", to_json("vendorInfo", &self.vendor_info)?)
            .text("location", to_json("location", &self.location)?);

        if let Some(bank_details) = &self.bank_details {
            form = form.text("bankDetails", to_json("bankDetails", bank_details)?);
        }
        if let Some(upi_details) = &self.upi_details {
            form = form.text("upiDetails", to_json("upiDetails", upi_details)?);
        }

        for document in self.documents {
            form = form.part("documents", file_part(document)?);
        }
        if let Some(selfie) = self.selfie {
            form = form.part("selfie", file_part(selfie)?);
        }
        Ok(form)
    }
}

fn to_json<T: serde::Serialize>(section: &str, value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize {section}: {e}")))
}
