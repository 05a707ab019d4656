//! Driver commands (admin).

use clap::Subcommand;

use mango_market_client::forms::DriverOnboardingForm;
use mango_market_client::types::{PersonalDetails, VehicleDetails};
use mango_market_core::{DriverApprovalStatus, DriverId};

use super::{CliError, Console, read_upload};

#[derive(Subcommand)]
pub enum DriverAction {
    /// Onboard a new driver
    Register {
        /// Driver name
        #[arg(short, long)]
        name: String,

        /// Driver phone number
        #[arg(short, long)]
        phone: String,

        /// Driver email
        #[arg(short, long)]
        email: Option<String>,

        /// Vehicle registration number
        #[arg(short, long)]
        registration: String,

        /// Vehicle type (bike, van, ...)
        #[arg(long)]
        vehicle_type: Option<String>,

        /// Repeatable document photo file (at least one required)
        #[arg(long = "document")]
        documents: Vec<String>,
    },
    /// List all drivers
    List,
    /// Set a driver's approval status
    SetStatus {
        /// Driver id
        driver_id: DriverId,

        /// One of: pending, approved, suspended
        status: DriverApprovalStatus,
    },
}

pub async fn run(console: &Console, action: DriverAction) -> Result<(), CliError> {
    match action {
        DriverAction::Register {
            name,
            phone,
            email,
            registration,
            vehicle_type,
            documents,
        } => {
            let documents = documents
                .iter()
                .map(|path| read_upload(path))
                .collect::<Result<Vec<_>, _>>()?;

            let form = DriverOnboardingForm {
                personal_details: PersonalDetails { name, phone, email },
                vehicle_details: VehicleDetails {
                    registration_number: registration,
                    vehicle_type,
                    model: None,
                },
                documents,
            };
            console.client().create_driver(form).await?;
            tracing::info!("Driver registered");
        }
        DriverAction::List => {
            let drivers = console.client().drivers().await?;
            tracing::info!("{} driver(s)", drivers.len());
            for driver in drivers {
                tracing::info!(
                    id = %driver.id,
                    name = %driver.personal_details.name,
                    status = %driver.approval_status,
                    floating_cash = %driver.floating_cash,
                    "driver"
                );
            }
        }
        DriverAction::SetStatus { driver_id, status } => {
            console.client().set_driver_status(&driver_id, status).await?;
            tracing::info!(driver_id = %driver_id, status = %status, "Driver status updated");
        }
    }
    Ok(())
}
