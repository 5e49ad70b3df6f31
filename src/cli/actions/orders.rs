use crate::api::orders;
use crate::cli::{
    actions::{print_json, read_json, require_view},
    globals::GlobalArgs,
};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Command {
    Shipping,
    Create { file: PathBuf },
    List,
    Details { order_id: u64 },
    Customers,
}

impl Command {
    /// Storefront view whose guard the command must pass.
    fn view(&self) -> String {
        match self {
            Self::Shipping | Self::Create { .. } => "/Checkout".to_string(),
            Self::List => "/Admin/Orders".to_string(),
            Self::Details { order_id } => format!("/Admin/OrderDetails/{order_id}"),
            Self::Customers => "/Admin/Customers".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a checkout or order administration action.
/// # Errors
/// Returns an error if the guard refuses the command or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, command } = args;
    let store = globals.session_store();
    require_view(store.session(), &command.view())?;
    let client = globals.client(store.session())?;

    let value = match command {
        Command::Shipping => orders::shipping_costs(&client).await?,
        Command::Create { file } => orders::create(&client, &read_json(&file)?).await?,
        Command::List => orders::all_orders(&client).await?,
        Command::Details { order_id } => orders::order_details(&client, order_id).await?,
        Command::Customers => orders::customers(&client).await?,
    };

    print_json(&value)
}
