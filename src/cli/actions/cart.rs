use crate::api::cart::{self, CartLine};
use crate::cli::{
    actions::{customer_id, print_json},
    globals::GlobalArgs,
};
use anyhow::Result;

const CART_VIEW: &str = "/Cart";

#[derive(Debug)]
pub enum Command {
    List,
    Add { line: CartLine, quantity: u32 },
    ChangeQuantity { line: CartLine, quantity: u32 },
    Remove { line: CartLine },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a cart action for the signed-in customer.
/// # Errors
/// Returns an error if nobody is signed in or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, command } = args;
    let store = globals.session_store();
    let customer = customer_id(store.session(), CART_VIEW)?;
    let client = globals.client(store.session())?;

    let value = match command {
        Command::List => cart::items(&client, &customer).await?,
        Command::Add { line, quantity } => cart::add(&client, &customer, line, quantity).await?,
        Command::ChangeQuantity { line, quantity } => {
            cart::change_quantity(&client, &customer, line, quantity).await?
        }
        Command::Remove { line } => cart::remove(&client, &customer, line).await?,
    };

    print_json(&value)
}
