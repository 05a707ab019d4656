//! Product and variation commands.
//!
//! Variation edits take `--image-url` (kept stored images) and
//! `--image-file` (new uploads) arguments; the client partitions the mixed
//! list into the multipart payload on submit.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use mango_market_client::forms::{ProductForm, VariationForm};
use mango_market_client::types::{NamedAttribute, VariationAttributes};
use mango_market_core::{CategoryId, ProductId, VariationId};

use super::{CliError, Console, image_sources};

#[derive(Subcommand)]
pub enum ProductAction {
    /// List the vendor's products
    List {
        /// List the whole catalog instead (admin)
        #[arg(long)]
        all: bool,
    },
    /// Show one product with its variations
    Show {
        /// Product id
        product_id: ProductId,
    },
    /// Create a product with one initial variation
    Create {
        #[command(flatten)]
        details: ProductDetails,

        #[command(flatten)]
        variation: VariationArgs,
    },
    /// Update a product's details and first variation
    Update {
        /// Product id
        product_id: ProductId,

        #[command(flatten)]
        details: ProductDetails,

        #[command(flatten)]
        variation: VariationArgs,
    },
    /// Delete a product
    Delete {
        /// Product id
        product_id: ProductId,
    },
    /// Flip storefront visibility
    ToggleVisibility {
        /// Product id
        product_id: ProductId,
    },
    /// Variation sub-resource
    Variations {
        #[command(subcommand)]
        action: VariationAction,
    },
}

#[derive(Subcommand)]
pub enum VariationAction {
    /// Add a variation to a product
    Add {
        /// Product id
        product_id: ProductId,

        #[command(flatten)]
        variation: VariationArgs,
    },
    /// Update one variation (images = kept URLs + new files)
    Update {
        /// Product id
        product_id: ProductId,

        /// Variation id
        variation_id: VariationId,

        #[command(flatten)]
        variation: VariationArgs,
    },
    /// Remove one variation
    Remove {
        /// Product id
        product_id: ProductId,

        /// Variation id
        variation_id: VariationId,
    },
}

#[derive(Args)]
pub struct ProductDetails {
    /// Product name
    #[arg(short, long)]
    name: String,

    /// Product description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Category id
    #[arg(short, long)]
    category: CategoryId,

    /// Repeatable tag
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Allow returns for this product
    #[arg(long)]
    returnable: bool,

    /// Hide the product from the storefront
    #[arg(long)]
    hidden: bool,
}

#[derive(Args)]
pub struct VariationArgs {
    /// Unit price
    #[arg(long)]
    price: Decimal,

    /// Discount percentage (0-100)
    #[arg(long, default_value = "0")]
    discount: Decimal,

    /// Stock quantity
    #[arg(long)]
    quantity: u32,

    /// Repeatable attribute as name=value
    #[arg(long = "attr")]
    attributes: Vec<String>,

    /// Repeatable stored image URL to keep
    #[arg(long = "image-url")]
    image_urls: Vec<String>,

    /// Repeatable new image file to upload
    #[arg(long = "image-file")]
    image_files: Vec<String>,
}

impl VariationArgs {
    fn into_form(self) -> Result<VariationForm, CliError> {
        let attributes = VariationAttributes::Named(
            self.attributes
                .iter()
                .map(|attr| {
                    let (name, value) = attr.split_once('=').unwrap_or((attr.as_str(), ""));
                    NamedAttribute {
                        name: name.to_owned(),
                        value: value.to_owned(),
                    }
                })
                .collect(),
        );

        Ok(VariationForm {
            attributes,
            price: self.price,
            discount: self.discount,
            quantity: self.quantity,
            images: image_sources(self.image_urls, self.image_files)?,
        })
    }
}

impl ProductDetails {
    fn into_form(self, variations: Vec<VariationForm>) -> ProductForm {
        ProductForm {
            name: self.name,
            description: self.description,
            category: self.category,
            tags: self.tags,
            is_return_allowed: self.returnable,
            is_visible: !self.hidden,
            variations,
        }
    }
}

pub async fn run(console: &Console, action: ProductAction) -> Result<(), CliError> {
    match action {
        ProductAction::List { all } => {
            let products = if all {
                console.client().products().await?
            } else {
                let vendor_id = console.vendor_id()?;
                console.client().vendor_products(&vendor_id).await?
            };
            tracing::info!("{} product(s)", products.len());
            for product in products {
                tracing::info!(
                    id = %product.id,
                    name = %product.name,
                    visible = product.is_visible,
                    variations = product.variations.len(),
                    "product"
                );
            }
        }
        ProductAction::Show { product_id } => {
            let product = console.client().product(&product_id).await?;
            tracing::info!(id = %product.id, name = %product.name, "product");
            for variation in &product.variations {
                tracing::info!(
                    id = variation.id.as_ref().map_or("-", |id| id.as_str()),
                    price = %variation.price,
                    discount = %variation.discount,
                    quantity = variation.quantity,
                    images = variation.images.len(),
                    "variation"
                );
            }
        }
        ProductAction::Create { details, variation } => {
            let form = details.into_form(vec![variation.into_form()?]);
            console.client().create_product(form).await?;
            tracing::info!("Product created");
        }
        ProductAction::Update {
            product_id,
            details,
            variation,
        } => {
            let form = details.into_form(vec![variation.into_form()?]);
            console.client().update_product(&product_id, form).await?;
            tracing::info!(product_id = %product_id, "Product updated");
        }
        ProductAction::Delete { product_id } => {
            console.client().delete_product(&product_id).await?;
            tracing::info!(product_id = %product_id, "Product deleted");
        }
        ProductAction::ToggleVisibility { product_id } => {
            console.client().toggle_product_visibility(&product_id).await?;
            tracing::info!(product_id = %product_id, "Visibility toggled");
        }
        ProductAction::Variations { action } => match action {
            VariationAction::Add {
                product_id,
                variation,
            } => {
                console
                    .client()
                    .add_variation(&product_id, variation.into_form()?)
                    .await?;
                tracing::info!(product_id = %product_id, "Variation added");
            }
            VariationAction::Update {
                product_id,
                variation_id,
                variation,
            } => {
                console
                    .client()
                    .update_variation(&product_id, &variation_id, variation.into_form()?)
                    .await?;
                tracing::info!(
                    product_id = %product_id,
                    variation_id = %variation_id,
                    "Variation updated"
                );
            }
            VariationAction::Remove {
                product_id,
                variation_id,
            } => {
                console
                    .client()
                    .delete_variation(&product_id, &variation_id)
                    .await?;
                tracing::info!(
                    product_id = %product_id,
                    variation_id = %variation_id,
                    "Variation removed"
                );
            }
        },
    }
    Ok(())
}
