use crate::api::wishlist;
use crate::cli::{
    actions::{customer_id, print_json},
    globals::GlobalArgs,
};
use anyhow::Result;

const WISHLIST_VIEW: &str = "/Wishlist";

#[derive(Debug)]
pub enum Command {
    List,
    Add { product_id: u64 },
    Remove { product_id: u64 },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a wishlist action for the signed-in customer.
/// # Errors
/// Returns an error if nobody is signed in or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, command } = args;
    let store = globals.session_store();
    let customer = customer_id(store.session(), WISHLIST_VIEW)?;
    let client = globals.client(store.session())?;

    let value = match command {
        Command::List => wishlist::items(&client, &customer).await?,
        Command::Add { product_id } => wishlist::add(&client, &customer, product_id).await?,
        Command::Remove { product_id } => wishlist::remove(&client, &customer, product_id).await?,
    };

    print_json(&value)
}
