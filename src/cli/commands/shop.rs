use clap::{Arg, ArgAction, Command};

pub const ARG_PATH: &str = "path";
pub const ARG_PAGE: &str = "page";
pub const ARG_PAGE_SIZE: &str = "page-size";
pub const ARG_ALL: &str = "all";
pub const ARG_ID: &str = "id";
pub const ARG_VARIANT: &str = "variant";
pub const ARG_SIZE: &str = "size";
pub const ARG_QUANTITY: &str = "quantity";
pub const ARG_PRODUCT: &str = "product";
pub const ARG_FILE: &str = "file";

pub(crate) fn id(help: &'static str) -> Arg {
    Arg::new(ARG_ID)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(u64))
}

pub(crate) fn json_file(help: &'static str) -> Arg {
    Arg::new(ARG_FILE)
        .short('f')
        .long(ARG_FILE)
        .help(help)
        .long_help(format!("{help}. Use - to read from stdin."))
        .required(true)
}

fn variant_and_size(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_VARIANT)
                .long(ARG_VARIANT)
                .help("Product variant id")
                .required(true)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_SIZE)
                .long(ARG_SIZE)
                .help("Size id")
                .required(true)
                .value_parser(clap::value_parser!(u64)),
        )
}

fn quantity(default: Option<&'static str>) -> Arg {
    let arg = Arg::new(ARG_QUANTITY)
        .short('q')
        .long(ARG_QUANTITY)
        .help("Quantity")
        .value_parser(clap::value_parser!(u32).range(1..));
    match default {
        Some(value) => arg.default_value(value),
        None => arg.required(true),
    }
}

fn product_id() -> Arg {
    Arg::new(ARG_PRODUCT)
        .help("Product id")
        .required(true)
        .value_parser(clap::value_parser!(u64))
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new("visit")
                .about("Resolve a storefront path and show where the guard sends you")
                .arg(Arg::new(ARG_PATH).help("Path such as /Admin/Orders, or a route name such as admin-orders").required(true)),
        )
        .subcommand(
            Command::new("products")
                .about("List products")
                .arg(
                    Arg::new(ARG_PAGE)
                        .long(ARG_PAGE)
                        .default_value("1")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new(ARG_PAGE_SIZE)
                        .long(ARG_PAGE_SIZE)
                        .default_value("12")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new(ARG_ALL)
                        .long(ARG_ALL)
                        .help("Include unpublished products (admin)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("product")
                .about("Show product details")
                .arg(id("Product id")),
        )
        .subcommand(Command::new("categories").about("List product categories"))
        .subcommand(
            Command::new("cart")
                .about("Manage the shopping cart")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("Show cart items"))
                .subcommand(
                    variant_and_size(Command::new("add").about("Add an item"))
                        .arg(quantity(Some("1"))),
                )
                .subcommand(
                    variant_and_size(Command::new("qty").about("Change an item's quantity"))
                        .arg(quantity(None)),
                )
                .subcommand(variant_and_size(
                    Command::new("remove").about("Remove an item"),
                )),
        )
        .subcommand(
            Command::new("wishlist")
                .about("Manage the wishlist")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("Show wishlist items"))
                .subcommand(Command::new("add").about("Add a product").arg(product_id()))
                .subcommand(
                    Command::new("remove")
                        .about("Remove a product")
                        .arg(product_id()),
                ),
        )
        .subcommand(
            Command::new("orders")
                .about("Checkout and order administration")
                .subcommand_required(true)
                .subcommand(Command::new("shipping").about("Show shipping costs"))
                .subcommand(
                    Command::new("create")
                        .about("Place an order")
                        .arg(json_file("JSON file with the order")),
                )
                .subcommand(Command::new("list").about("List all orders (admin)"))
                .subcommand(
                    Command::new("details")
                        .about("Show an order (admin)")
                        .arg(id("Order id")),
                )
                .subcommand(Command::new("customers").about("List customers (admin)")),
        )
}
