//! Variation image merge: the multipart payload carries exactly the union
//! of kept URL strings (unchanged, in order) and newly added files - none
//! dropped, none duplicated - for any interleaving of add/remove edits
//! before submit.

use serde_json::json;

use mango_market_client::forms::VariationForm;
use mango_market_client::types::VariationAttributes;
use mango_market_core::{ImageSource, ImageUpload, ProductId, VariationId};
use mango_market_integration_tests::TestBackend;
use rust_decimal::Decimal;

fn upload(name: &str, len: usize) -> ImageSource {
    ImageSource::Upload(ImageUpload {
        file_name: name.to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![7_u8; len],
    })
}

fn url(value: &str) -> ImageSource {
    ImageSource::Url(value.to_owned())
}

fn form(images: Vec<ImageSource>) -> VariationForm {
    VariationForm {
        attributes: VariationAttributes::Single {
            selected: "weight".to_owned(),
            value: "1kg".to_owned(),
        },
        price: Decimal::new(12000, 2),
        discount: Decimal::new(10, 0),
        quantity: 25,
        images,
    }
}

#[tokio::test]
async fn submit_carries_exact_union_of_urls_and_files() {
    let backend = TestBackend::spawn().await;
    backend.stub("PUT", "/products/p1/variations/var1", 200, json!({}));

    let client = backend.authed_client().await;
    client
        .update_variation(
            &ProductId::new("p1"),
            &VariationId::new("var1"),
            form(vec![
                url("https://cdn.example.com/a.png"),
                upload("new-1.png", 64),
                url("https://cdn.example.com/b.png"),
                upload("new-2.png", 128),
            ]),
        )
        .await
        .expect("variation update should succeed");

    let requests = backend.requests_to("PUT", "/products/p1/variations/var1");
    assert_eq!(requests.len(), 1, "exactly one submit");
    let request = requests.first().expect("one request");

    // Kept URLs: unchanged, in order, as one JSON array part.
    let existing: Vec<String> =
        serde_json::from_str(request.text_part("existingImages")).expect("existingImages is JSON");
    assert_eq!(
        existing,
        vec![
            "https://cdn.example.com/a.png".to_owned(),
            "https://cdn.example.com/b.png".to_owned(),
        ]
    );

    // New files: all appended under the shared field name, none dropped.
    let files = request.parts_named("images");
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].file_name.as_deref(), Some("new-1.png"));
    assert_eq!(files[0].len, 64);
    assert_eq!(files[1].file_name.as_deref(), Some("new-2.png"));
    assert_eq!(files[1].len, 128);

    // Non-image fields travel as JSON in the payload part.
    let payload: serde_json::Value =
        serde_json::from_str(request.text_part("payload")).expect("payload is JSON");
    assert_eq!(payload["quantity"], 25);
    assert_eq!(payload["attributes"]["selected"], "weight");
}

#[tokio::test]
async fn removals_before_submit_never_reach_the_backend() {
    let backend = TestBackend::spawn().await;
    backend.stub("PUT", "/products/p1/variations/var1", 200, json!({}));

    // Edit session: load [a, b] + add f1, remove a, add f2, remove f1.
    let mut images = vec![
        url("https://cdn.example.com/a.png"),
        url("https://cdn.example.com/b.png"),
    ];
    images.push(upload("f1.png", 32));
    images.remove(0);
    images.push(upload("f2.png", 48));
    images.retain(|image| !matches!(
        image,
        ImageSource::Upload(upload) if upload.file_name == "f1.png"
    ));

    let client = backend.authed_client().await;
    client
        .update_variation(&ProductId::new("p1"), &VariationId::new("var1"), form(images))
        .await
        .expect("variation update should succeed");

    // Exactly one request: removal was a pure client-side filter.
    let requests = backend.requests_to("PUT", "/products/p1/variations/var1");
    assert_eq!(requests.len(), 1);
    let request = requests.first().expect("one request");

    let existing: Vec<String> =
        serde_json::from_str(request.text_part("existingImages")).expect("existingImages is JSON");
    assert_eq!(existing, vec!["https://cdn.example.com/b.png".to_owned()]);

    let files = request.parts_named("images");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name.as_deref(), Some("f2.png"));
}

#[tokio::test]
async fn oversized_upload_fails_validation_before_any_request() {
    let backend = TestBackend::spawn().await;

    let client = backend.authed_client().await;
    let result = client
        .update_variation(
            &ProductId::new("p1"),
            &VariationId::new("var1"),
            form(vec![upload("huge.png", mango_market_core::MAX_UPLOAD_BYTES + 1)]),
        )
        .await;

    assert!(result.is_err(), "oversized file must fail");
    assert!(
        backend.requests().is_empty(),
        "validation failures never reach the network"
    );
}
