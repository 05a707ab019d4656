//! Vendor management commands (admin).

use clap::Subcommand;
use secrecy::SecretString;

use mango_market_client::api::VendorUpdate;
use mango_market_client::session::{Session, SessionStore};
use mango_market_core::VendorId;

use super::{CliError, Console};

#[derive(Subcommand)]
pub enum VendorAction {
    /// List all vendors
    List,
    /// Show one vendor
    Show {
        /// Vendor id
        vendor_id: VendorId,
    },
    /// Rename a vendor
    Rename {
        /// Vendor id
        vendor_id: VendorId,

        /// New display name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a vendor
    Delete {
        /// Vendor id
        vendor_id: VendorId,
    },
    /// Restrict a vendor from transacting
    ///
    /// A failed toggle reports the error; success is never assumed.
    Restrict {
        /// Vendor id
        vendor_id: VendorId,
    },
    /// Lift a vendor's restriction
    Unrestrict {
        /// Vendor id
        vendor_id: VendorId,
    },
    /// Adopt a vendor's session (admin impersonation)
    LoginAs {
        /// Vendor id
        vendor_id: VendorId,
    },
}

pub async fn run(console: &Console, action: VendorAction) -> Result<(), CliError> {
    match action {
        VendorAction::List => {
            let vendors = console.client().vendors().await?;
            tracing::info!("{} vendor(s)", vendors.len());
            for vendor in vendors {
                tracing::info!(
                    id = %vendor.id,
                    name = %vendor.name,
                    restricted = vendor.is_restricted,
                    "vendor"
                );
            }
        }
        VendorAction::Show { vendor_id } => {
            let vendor = console.client().vendor(&vendor_id).await?;
            tracing::info!(
                id = %vendor.id,
                name = %vendor.name,
                shop = vendor
                    .vendor_info
                    .as_ref()
                    .map_or("-", |info| info.shop_name.as_str()),
                restricted = vendor.is_restricted,
                "vendor"
            );
        }
        VendorAction::Rename { vendor_id, name } => {
            let update = VendorUpdate {
                name: Some(name),
                ..VendorUpdate::default()
            };
            console.client().update_vendor(&vendor_id, &update).await?;
            tracing::info!(vendor_id = %vendor_id, "Vendor updated");
        }
        VendorAction::Delete { vendor_id } => {
            console.client().delete_vendor(&vendor_id).await?;
            tracing::info!(vendor_id = %vendor_id, "Vendor deleted");
        }
        VendorAction::Restrict { vendor_id } => {
            console.client().restrict_vendor(&vendor_id).await?;
            tracing::info!(vendor_id = %vendor_id, "Vendor restricted");
        }
        VendorAction::Unrestrict { vendor_id } => {
            console.client().unrestrict_vendor(&vendor_id).await?;
            tracing::info!(vendor_id = %vendor_id, "Vendor unrestricted");
        }
        VendorAction::LoginAs { vendor_id } => {
            let response = console.client().login_as_vendor(&vendor_id).await?;

            let session = Session::authenticated(
                SecretString::from(response.token),
                response.user,
            );
            console.store().save(&session)?;
            console.client().set_token(session.token).await;

            tracing::info!(
                vendor_id = %vendor_id,
                email = %session.user.email,
                "Now acting as vendor"
            );
        }
    }
    Ok(())
}
