//! Multi-step onboarding submissions.
//!
//! Vendor signup and driver onboarding validate client-side (sequentially,
//! first violation wins) and submit one multipart request with the nested
//! sections JSON-stringified alongside the raw file parts.

use serde_json::json;

use mango_market_client::forms::{DriverOnboardingForm, VendorSignupForm};
use mango_market_client::types::{Address, Location, PersonalDetails, VehicleDetails, VendorInfo};
use mango_market_core::ImageUpload;
use mango_market_integration_tests::TestBackend;

fn upload(name: &str) -> ImageUpload {
    ImageUpload {
        file_name: name.to_owned(),
        content_type: "image/jpeg".to_owned(),
        bytes: vec![3_u8; 512],
    }
}

fn signup_form() -> VendorSignupForm {
    VendorSignupForm {
        name: "Asha Sharma".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "correct-horse".to_owned(),
        phone: "5550100".to_owned(),
        vendor_info: VendorInfo {
            shop_name: "Green Grocer".to_owned(),
            shop_description: Some("Fruit and veg".to_owned()),
            phone: None,
        },
        location: Location {
            address: Address {
                street: Some("14 Market Rd".to_owned()),
                city: "Pune".to_owned(),
                state: None,
                postal_codes: vec!["411001".to_owned()],
            },
            coordinates: None,
        },
        bank_details: None,
        upi_details: None,
        documents: vec![upload("gst.jpg"), upload("licence.jpg")],
        selfie: Some(upload("selfie.jpg")),
    }
}

#[tokio::test]
async fn signup_submits_one_multipart_with_nested_json_sections() {
    let backend = TestBackend::spawn().await;
    backend.stub(
        "POST",
        "/vendors/signup",
        200,
        json!({
            "token": "tok-new",
            "user": {
                "_id": "v9",
                "role": "vendor",
                "name": "Asha Sharma",
                "email": "asha@example.com"
            }
        }),
    );

    let client = backend.client();
    let response = client
        .signup(signup_form())
        .await
        .expect("signup should succeed");
    assert_eq!(response.user.id.as_str(), "v9");

    let requests = backend.requests_to("POST", "/vendors/signup");
    assert_eq!(requests.len(), 1, "one multipart submission");
    let request = requests.first().expect("one request");

    // Nested sections are JSON strings, not flattened fields.
    let vendor_info: serde_json::Value =
        serde_json::from_str(request.text_part("vendorInfo")).expect("vendorInfo is JSON");
    assert_eq!(vendor_info["shopName"], "Green Grocer");

    let location: serde_json::Value =
        serde_json::from_str(request.text_part("location")).expect("location is JSON");
    assert_eq!(location["address"]["postalCodes"], json!(["411001"]));

    // Both documents and the selfie travel as raw file parts.
    assert_eq!(request.parts_named("documents").len(), 2);
    assert_eq!(request.parts_named("selfie").len(), 1);
}

#[tokio::test]
async fn invalid_signup_never_reaches_the_network() {
    let backend = TestBackend::spawn().await;

    let mut form = signup_form();
    form.documents.clear();

    let client = backend.client();
    let err = client.signup(form).await.expect_err("must fail validation");
    assert!(err.to_string().contains("documents"));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn driver_onboarding_submits_details_and_documents() {
    let backend = TestBackend::spawn().await;
    backend.stub("POST", "/create-driver", 200, json!({ "message": "created" }));

    let form = DriverOnboardingForm {
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
        documents: vec![upload("licence.jpg")],
    };

    let client = backend.authed_client().await;
    client.create_driver(form).await.expect("onboarding succeeds");

    let requests = backend.requests_to("POST", "/create-driver");
    assert_eq!(requests.len(), 1);
    let request = requests.first().expect("one request");

    let personal: serde_json::Value =
        serde_json::from_str(request.text_part("personalDetails")).expect("JSON section");
    assert_eq!(personal["name"], "Kiran");

    let vehicle: serde_json::Value =
        serde_json::from_str(request.text_part("vehicleDetails")).expect("JSON section");
    assert_eq!(vehicle["registrationNumber"], "MH12AB1234");

    assert_eq!(request.parts_named("documents").len(), 1);
}
