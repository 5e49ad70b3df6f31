use crate::api::auth::{self, Registration};
use crate::cli::globals::GlobalArgs;
use crate::session::Session;
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

#[derive(Debug)]
pub enum Command {
    Login {
        email: String,
        password: SecretString,
    },
    Register {
        registration: Registration,
        code: String,
    },
    SendOtp {
        email: String,
        purpose: String,
    },
    VerifyOtp {
        email: String,
        code: String,
    },
    ForgotPassword {
        email: String,
    },
    ResetPassword {
        email: String,
        token: SecretString,
        code: String,
        new_password: SecretString,
    },
    Exists {
        email: String,
    },
    Logout,
    WhoAmI,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute an account action.
/// # Errors
/// Returns an error if the API call fails or the session cannot be updated.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, command } = args;
    let mut store = globals.session_store();
    let client = globals.client(store.session())?;

    match command {
        Command::Login { email, password } => {
            let token = auth::login(&client, &email, &password).await?;
            let session = store.establish(&token)?;
            report_signed_in(session);
        }
        Command::Register { registration, code } => {
            if !auth::validate_otp(&client, &registration.email, &code).await? {
                bail!("Invalid OTP code");
            }
            let token = auth::register(&client, &registration).await?;
            let session = store.establish(&token)?;
            report_signed_in(session);
        }
        Command::SendOtp { email, purpose } => {
            auth::generate_otp(&client, &email, &purpose).await?;
            println!("A one-time code was sent to {email}");
        }
        Command::VerifyOtp { email, code } => {
            if !auth::validate_otp(&client, &email, &code).await? {
                bail!("Invalid OTP code");
            }
            println!("Code accepted");
        }
        Command::ForgotPassword { email } => {
            let token = auth::generate_reset_token(&client, &email).await?;
            auth::generate_otp(&client, &email, auth::OTP_PURPOSE_CONFIRMATION).await?;
            info!("reset token issued, confirmation code sent");
            println!("{}", token.expose_secret());
            eprintln!(
                "A one-time code was sent to {email}; pass it with the token above to `password reset`"
            );
        }
        Command::ResetPassword {
            email,
            token,
            code,
            new_password,
        } => {
            if !auth::validate_otp(&client, &email, &code).await? {
                bail!("Invalid OTP code");
            }
            auth::reset_password(&client, &email, &token, &new_password).await?;
            println!("Password updated, sign in again at /Login");
        }
        Command::Exists { email } => {
            println!("{}", auth::check_existence(&client, &email).await?);
        }
        Command::Logout => {
            store.clear()?;
            info!("signed out");
            println!("Signed out");
        }
        Command::WhoAmI => report_session(store.session()),
    }

    Ok(())
}

fn report_signed_in(session: &Session) {
    if let Some(name) = session.display_name() {
        println!("Signed in as {name}, continue at {}", session.landing_path());
    }
}

fn report_session(session: &Session) {
    match session.claims() {
        Some(claims) => {
            println!("{} <{}>", claims.full_name, claims.email);
            println!("id:    {}", claims.id);
            println!("phone: {}", claims.phone_number);
            println!("role:  {}", claims.role);
        }
        None => println!("Not signed in"),
    }
}
