//! Category and banner commands.

use clap::Subcommand;

use mango_market_client::api::CategoryScope;
use mango_market_client::forms::{BannerForm, CategoryForm};
use mango_market_core::{BannerId, CategoryId};

use super::{CliError, Console, image_sources};

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories
    List {
        /// Operate on the vendor-scoped resource instead of the global one
        #[arg(long)]
        vendor: bool,
    },
    /// Create a category
    Create {
        /// Category name
        #[arg(short, long)]
        name: String,

        /// Repeatable stored image URL to keep
        #[arg(long = "image-url")]
        image_urls: Vec<String>,

        /// Repeatable new image file to upload
        #[arg(long = "image-file")]
        image_files: Vec<String>,

        #[arg(long)]
        vendor: bool,
    },
    /// Update a category
    Update {
        /// Category id
        category_id: CategoryId,

        /// Category name
        #[arg(short, long)]
        name: String,

        /// Repeatable stored image URL to keep
        #[arg(long = "image-url")]
        image_urls: Vec<String>,

        /// Repeatable new image file to upload
        #[arg(long = "image-file")]
        image_files: Vec<String>,

        #[arg(long)]
        vendor: bool,
    },
    /// Delete a category
    Delete {
        /// Category id
        category_id: CategoryId,

        #[arg(long)]
        vendor: bool,
    },
}

#[derive(Subcommand)]
pub enum BannerAction {
    /// List banners
    List,
    /// Create a banner
    Create {
        /// Banner title
        #[arg(short, long)]
        title: String,

        /// Target link
        #[arg(short, long)]
        link: Option<String>,

        /// Create the banner active
        #[arg(long)]
        active: bool,

        /// Repeatable stored image URL to keep
        #[arg(long = "image-url")]
        image_urls: Vec<String>,

        /// Repeatable new image file to upload
        #[arg(long = "image-file")]
        image_files: Vec<String>,
    },
    /// Update a banner
    Update {
        /// Banner id
        banner_id: BannerId,

        /// Banner title
        #[arg(short, long)]
        title: String,

        /// Target link
        #[arg(short, long)]
        link: Option<String>,

        /// Keep the banner active
        #[arg(long)]
        active: bool,

        /// Repeatable stored image URL to keep
        #[arg(long = "image-url")]
        image_urls: Vec<String>,

        /// Repeatable new image file to upload
        #[arg(long = "image-file")]
        image_files: Vec<String>,
    },
    /// Delete a banner
    Delete {
        /// Banner id
        banner_id: BannerId,
    },
    /// Show or hide a banner on the storefront
    SetActive {
        /// Banner id
        banner_id: BannerId,

        /// true to show, false to hide
        active: bool,
    },
}

const fn scope(vendor: bool) -> CategoryScope {
    if vendor {
        CategoryScope::Vendor
    } else {
        CategoryScope::Global
    }
}

pub async fn run_categories(console: &Console, action: CategoryAction) -> Result<(), CliError> {
    match action {
        CategoryAction::List { vendor } => {
            let categories = console.client().categories(scope(vendor)).await?;
            tracing::info!("{} categor(ies)", categories.len());
            for category in categories {
                tracing::info!(id = %category.id, name = %category.name, "category");
            }
        }
        CategoryAction::Create {
            name,
            image_urls,
            image_files,
            vendor,
        } => {
            let form = CategoryForm {
                name,
                images: image_sources(image_urls, image_files)?,
            };
            console.client().create_category(scope(vendor), form).await?;
            tracing::info!("Category created");
        }
        CategoryAction::Update {
            category_id,
            name,
            image_urls,
            image_files,
            vendor,
        } => {
            let form = CategoryForm {
                name,
                images: image_sources(image_urls, image_files)?,
            };
            console
                .client()
                .update_category(scope(vendor), &category_id, form)
                .await?;
            tracing::info!(category_id = %category_id, "Category updated");
        }
        CategoryAction::Delete {
            category_id,
            vendor,
        } => {
            console
                .client()
                .delete_category(scope(vendor), &category_id)
                .await?;
            tracing::info!(category_id = %category_id, "Category deleted");
        }
    }
    Ok(())
}

pub async fn run_banners(console: &Console, action: BannerAction) -> Result<(), CliError> {
    match action {
        BannerAction::List => {
            let banners = console.client().banners().await?;
            tracing::info!("{} banner(s)", banners.len());
            for banner in banners {
                tracing::info!(
                    id = %banner.id,
                    title = %banner.title,
                    active = banner.is_active,
                    "banner"
                );
            }
        }
        BannerAction::Create {
            title,
            link,
            active,
            image_urls,
            image_files,
        } => {
            let form = BannerForm {
                title,
                link,
                is_active: active,
                images: image_sources(image_urls, image_files)?,
            };
            console.client().create_banner(form).await?;
            tracing::info!("Banner created");
        }
        BannerAction::Update {
            banner_id,
            title,
            link,
            active,
            image_urls,
            image_files,
        } => {
            let form = BannerForm {
                title,
                link,
                is_active: active,
                images: image_sources(image_urls, image_files)?,
            };
            console.client().update_banner(&banner_id, form).await?;
            tracing::info!(banner_id = %banner_id, "Banner updated");
        }
        BannerAction::Delete { banner_id } => {
            console.client().delete_banner(&banner_id).await?;
            tracing::info!(banner_id = %banner_id, "Banner deleted");
        }
        BannerAction::SetActive { banner_id, active } => {
            console.client().set_banner_active(&banner_id, active).await?;
            tracing::info!(banner_id = %banner_id, active, "Banner visibility updated");
        }
    }
    Ok(())
}
