//! Multipart form builders for the image-bearing editors and the multi-step
//! onboarding flows.
//!
//! Every builder follows the same two-phase contract: sequential client-side
//! validation first (returning on the first violation, before any network
//! call), then one multipart payload. Image lists are partitioned exactly
//! once via `mango_market_core::partition_images` and serialized under one
//! shared convention:
//!
//! - non-image fields as JSON in a single `payload` part;
//! - surviving stored-image URLs as a JSON array in an `existingImages` part;
//! - each new file as an `images` file part.

mod banner;
mod category;
mod driver;
mod images;
mod product;
mod validate;
mod variation;
mod vendor_signup;

pub use banner::BannerForm;
pub use category::CategoryForm;
pub use driver::DriverOnboardingForm;
pub use product::ProductForm;
pub use variation::VariationForm;
pub use vendor_signup::VendorSignupForm;
