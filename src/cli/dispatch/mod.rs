//! Map parsed command-line arguments to an [`Action`].

use crate::api::{auth::Registration, cart::CartLine};
use crate::cli::actions::{account, admin, browse, cart, orders, wishlist, Action};
use crate::cli::commands::{account as account_args, admin as admin_args, client, shop};
use crate::cli::globals::GlobalArgs;
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

fn string(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("missing required argument: --{id}"))
}

fn secret(matches: &ArgMatches, id: &str) -> Result<SecretString> {
    matches
        .get_one::<String>(id)
        .filter(|v| !v.is_empty())
        .map(|v| SecretString::from(v.clone()))
        .ok_or_else(|| anyhow!("missing required argument: --{id}"))
}

fn number<T: Copy + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .copied()
        .ok_or_else(|| anyhow!("missing required argument: {id}"))
}

fn file(matches: &ArgMatches) -> Result<PathBuf> {
    string(matches, shop::ARG_FILE).map(PathBuf::from)
}

fn cart_line(matches: &ArgMatches) -> Result<CartLine> {
    Ok(CartLine {
        variant_id: number(matches, shop::ARG_VARIANT)?,
        size_id: number(matches, shop::ARG_SIZE)?,
    })
}

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::new(client::Options::parse(matches)?);

    let (name, sub_m) = matches.subcommand().context("missing subcommand")?;
    let nested = || sub_m.subcommand().context("missing subcommand");

    let action = match name {
        "login" => Action::Account(account::Args {
            globals,
            command: account::Command::Login {
                email: string(sub_m, account_args::ARG_EMAIL)?,
                password: secret(sub_m, account_args::ARG_PASSWORD)?,
            },
        }),
        "register" => Action::Account(account::Args {
            globals,
            command: account::Command::Register {
                registration: Registration {
                    name: string(sub_m, account_args::ARG_NAME)?,
                    email: string(sub_m, account_args::ARG_EMAIL)?,
                    phone_number: string(sub_m, account_args::ARG_PHONE)?,
                    password: secret(sub_m, account_args::ARG_PASSWORD)?,
                },
                code: string(sub_m, account_args::ARG_CODE)?,
            },
        }),
        "otp" => {
            let (verb, m) = nested()?;
            let email = string(m, account_args::ARG_EMAIL)?;
            let command = match verb {
                "send" => account::Command::SendOtp {
                    email,
                    purpose: string(m, account_args::ARG_PURPOSE)?,
                },
                "verify" => account::Command::VerifyOtp {
                    email,
                    code: string(m, account_args::ARG_CODE)?,
                },
                other => return Err(anyhow!("unknown otp command: {other}")),
            };
            Action::Account(account::Args { globals, command })
        }
        "password" => {
            let (verb, m) = nested()?;
            let email = string(m, account_args::ARG_EMAIL)?;
            let command = match verb {
                "forgot" => account::Command::ForgotPassword { email },
                "reset" => account::Command::ResetPassword {
                    email,
                    token: secret(m, account_args::ARG_TOKEN)?,
                    code: string(m, account_args::ARG_CODE)?,
                    new_password: secret(m, account_args::ARG_NEW_PASSWORD)?,
                },
                other => return Err(anyhow!("unknown password command: {other}")),
            };
            Action::Account(account::Args { globals, command })
        }
        "exists" => Action::Account(account::Args {
            globals,
            command: account::Command::Exists {
                email: string(sub_m, account_args::ARG_EMAIL)?,
            },
        }),
        "logout" => Action::Account(account::Args {
            globals,
            command: account::Command::Logout,
        }),
        "whoami" => Action::Account(account::Args {
            globals,
            command: account::Command::WhoAmI,
        }),
        "visit" => Action::Browse(browse::Args {
            globals,
            command: browse::Command::Visit {
                path: string(sub_m, shop::ARG_PATH)?,
            },
        }),
        "products" => Action::Browse(browse::Args {
            globals,
            command: browse::Command::Products {
                page: number(sub_m, shop::ARG_PAGE)?,
                page_size: number(sub_m, shop::ARG_PAGE_SIZE)?,
                all: sub_m.get_flag(shop::ARG_ALL),
            },
        }),
        "product" => Action::Browse(browse::Args {
            globals,
            command: browse::Command::Product {
                id: number(sub_m, shop::ARG_ID)?,
            },
        }),
        "categories" => Action::Browse(browse::Args {
            globals,
            command: browse::Command::Categories,
        }),
        "cart" => {
            let (verb, m) = nested()?;
            let command = match verb {
                "list" => cart::Command::List,
                "add" => cart::Command::Add {
                    line: cart_line(m)?,
                    quantity: number(m, shop::ARG_QUANTITY)?,
                },
                "qty" => cart::Command::ChangeQuantity {
                    line: cart_line(m)?,
                    quantity: number(m, shop::ARG_QUANTITY)?,
                },
                "remove" => cart::Command::Remove {
                    line: cart_line(m)?,
                },
                other => return Err(anyhow!("unknown cart command: {other}")),
            };
            Action::Cart(cart::Args { globals, command })
        }
        "wishlist" => {
            let (verb, m) = nested()?;
            let command = match verb {
                "list" => wishlist::Command::List,
                "add" => wishlist::Command::Add {
                    product_id: number(m, shop::ARG_PRODUCT)?,
                },
                "remove" => wishlist::Command::Remove {
                    product_id: number(m, shop::ARG_PRODUCT)?,
                },
                other => return Err(anyhow!("unknown wishlist command: {other}")),
            };
            Action::Wishlist(wishlist::Args { globals, command })
        }
        "orders" => {
            let (verb, m) = nested()?;
            let command = match verb {
                "shipping" => orders::Command::Shipping,
                "create" => orders::Command::Create { file: file(m)? },
                "list" => orders::Command::List,
                "details" => orders::Command::Details {
                    order_id: number(m, shop::ARG_ID)?,
                },
                "customers" => orders::Command::Customers,
                other => return Err(anyhow!("unknown orders command: {other}")),
            };
            Action::Orders(orders::Args { globals, command })
        }
        "admin" => Action::Admin(admin::Args {
            globals,
            command: admin_command(nested()?)?,
        }),
        other => return Err(anyhow!("unknown command: {other}")),
    };

    Ok(action)
}

fn admin_command((verb, m): (&str, &ArgMatches)) -> Result<admin::Command> {
    Ok(match verb {
        "colors" => admin::Command::Colors,
        "sizes" => admin::Command::Sizes,
        "add-color" => admin::Command::AddColor {
            name: string(m, admin_args::ARG_NAME)?,
            color: string(m, admin_args::ARG_COLOR)?,
        },
        "add-size" => admin::Command::AddSize {
            name: string(m, admin_args::ARG_NAME)?,
        },
        "create-product" => admin::Command::CreateProduct { file: file(m)? },
        "create-variants" => admin::Command::CreateVariants { file: file(m)? },
        "add-images" => admin::Command::AddImages { file: file(m)? },
        "delete-product" => admin::Command::DeleteProduct {
            product_id: number(m, shop::ARG_ID)?,
        },
        "delete-variant" => admin::Command::DeleteVariant {
            variant_id: number(m, shop::ARG_ID)?,
        },
        "delete-image" => admin::Command::DeleteImage {
            image_id: number(m, shop::ARG_ID)?,
        },
        "variant" => admin::Command::Variant {
            variant_id: number(m, shop::ARG_VARIANT)?,
            size_id: number(m, shop::ARG_SIZE)?,
        },
        other => return Err(anyhow!("unknown admin command: {other}")),
    })
}
