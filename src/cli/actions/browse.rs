use crate::api::catalog;
use crate::cli::{actions::print_json, actions::require_view, globals::GlobalArgs};
use crate::routes::{by_name, navigate, Navigation};
use anyhow::{anyhow, Result};

#[derive(Debug)]
pub enum Command {
    Visit { path: String },
    Products { page: u32, page_size: u32, all: bool },
    Product { id: u64 },
    Categories,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a browsing action.
/// # Errors
/// Returns an error if the API call fails or the guard refuses the admin listing.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, command } = args;
    let store = globals.session_store();
    let session = store.session();

    let value = match command {
        Command::Visit { path } => {
            let path = visit_target(&path)?;
            report_navigation(path, navigate(session, path));
            return Ok(());
        }
        Command::Products {
            page,
            page_size,
            all: true,
        } => {
            require_view(session, "/Admin/AdminProducts")?;
            catalog::admin_products(&globals.client(session)?, page, page_size).await?
        }
        Command::Products {
            page,
            page_size,
            all: false,
        } => catalog::products(&globals.client(session)?, page, page_size).await?,
        Command::Product { id } => catalog::product_details(&globals.client(session)?, id).await?,
        Command::Categories => catalog::categories(&globals.client(session)?).await?,
    };

    print_json(&value)
}

/// Paths start with `/`; anything else names a route from the table.
fn visit_target(target: &str) -> Result<&str> {
    if target.starts_with('/') {
        Ok(target)
    } else {
        by_name(target)
            .map(|route| route.pattern)
            .ok_or_else(|| anyhow!("no storefront route named {target}"))
    }
}

fn report_navigation(path: &str, navigation: Navigation) {
    match navigation {
        Navigation::Render(matched) => {
            println!("render {} ({})", matched.route.name, matched.route.pattern);
            for (name, value) in &matched.params {
                println!("  {name} = {value}");
            }
        }
        Navigation::Redirect(target) => println!("redirect {path} -> {target}"),
        Navigation::NotFound => println!("not found: {path}"),
    }
}
