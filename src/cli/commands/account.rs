use crate::api::auth::OTP_PURPOSE_CONFIRMATION;
use clap::{Arg, Command};

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_NAME: &str = "name";
pub const ARG_PHONE: &str = "phone";
pub const ARG_CODE: &str = "code";
pub const ARG_PURPOSE: &str = "purpose";
pub const ARG_TOKEN: &str = "token";
pub const ARG_NEW_PASSWORD: &str = "new-password";

fn email() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long(ARG_EMAIL)
        .help("Account email")
        .required(true)
}

fn password() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long(ARG_PASSWORD)
        .help("Account password")
        .env("STOREFRONT_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

fn code() -> Arg {
    Arg::new(ARG_CODE)
        .short('c')
        .long(ARG_CODE)
        .help("One-time code received by email")
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session")
                .arg(email())
                .arg(password()),
        )
        .subcommand(
            Command::new("register")
                .about("Confirm the emailed code and create a customer account")
                .arg(Arg::new(ARG_NAME).long(ARG_NAME).help("Full name").required(true))
                .arg(email())
                .arg(
                    Arg::new(ARG_PHONE)
                        .long(ARG_PHONE)
                        .help("Phone number")
                        .required(true),
                )
                .arg(password())
                .arg(code()),
        )
        .subcommand(
            Command::new("otp")
                .about("One-time codes")
                .subcommand_required(true)
                .subcommand(
                    Command::new("send").about("Email a one-time code").arg(email()).arg(
                        Arg::new(ARG_PURPOSE)
                            .long(ARG_PURPOSE)
                            .help("What the code is for")
                            .default_value(OTP_PURPOSE_CONFIRMATION),
                    ),
                )
                .subcommand(
                    Command::new("verify")
                        .about("Check a one-time code")
                        .arg(email())
                        .arg(code()),
                ),
        )
        .subcommand(
            Command::new("password")
                .about("Password recovery")
                .subcommand_required(true)
                .subcommand(
                    Command::new("forgot")
                        .about("Request a reset token and email a confirmation code")
                        .arg(email()),
                )
                .subcommand(
                    Command::new("reset")
                        .about("Confirm the emailed code and set a new password")
                        .arg(email())
                        .arg(code())
                        .arg(
                            Arg::new(ARG_TOKEN)
                                .long(ARG_TOKEN)
                                .help("Reset token")
                                .env("STOREFRONT_RESET_TOKEN")
                                .hide_env_values(true)
                                .required(true),
                        )
                        .arg(
                            Arg::new(ARG_NEW_PASSWORD)
                                .long(ARG_NEW_PASSWORD)
                                .help("New password")
                                .env("STOREFRONT_NEW_PASSWORD")
                                .hide_env_values(true)
                                .required(true),
                        ),
                ),
        )
        .subcommand(
            Command::new("exists")
                .about("Check whether an account uses an email")
                .arg(email()),
        )
        .subcommand(Command::new("logout").about("Forget the stored session"))
        .subcommand(Command::new("whoami").about("Show the current session"))
}
