//! Session commands: login, logout, whoami, password reset.
//!
//! Login success writes the session file and the in-memory token in the same
//! call; logout clears both. The file is the durable copy.

use clap::Subcommand;
use secrecy::SecretString;

use mango_market_client::session::{Session, SessionStore};

use super::{CliError, Console};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in with email and password
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the logged-in account
    Whoami,
    /// Request a password-reset email
    ForgotPassword {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
    /// Complete a password reset with the emailed token
    ResetPassword {
        /// Reset token from the email
        #[arg(short, long)]
        token: String,

        /// New password
        #[arg(short, long)]
        password: String,
    },
}

pub async fn run(console: &Console, action: AuthAction) -> Result<(), CliError> {
    match action {
        AuthAction::Login { email, password } => {
            let response = console.client().login(&email, &password).await?;

            let session = Session::authenticated(
                SecretString::from(response.token),
                response.user,
            );
            console.store().save(&session)?;
            console.client().set_token(session.token).await;

            tracing::info!(
                email = %session.user.email,
                role = %session.user.role,
                "Logged in"
            );
        }
        AuthAction::Logout => {
            console.store().clear()?;
            console.client().clear_token().await;
            tracing::info!("Logged out");
        }
        AuthAction::Whoami => {
            let session = console.session()?;
            tracing::info!(
                name = %session.user.name,
                email = %session.user.email,
                role = %session.user.role,
                "Current session"
            );
        }
        AuthAction::ForgotPassword { email } => {
            let ack = console.client().forgot_password(&email).await?;
            tracing::info!(
                message = ack.message.as_deref().unwrap_or("reset email requested"),
                "Password reset requested"
            );
        }
        AuthAction::ResetPassword { token, password } => {
            console.client().reset_password(&token, &password).await?;
            tracing::info!("Password reset complete; log in with the new password");
        }
    }
    Ok(())
}
