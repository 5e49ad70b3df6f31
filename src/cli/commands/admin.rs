use super::shop::{id, json_file, ARG_SIZE, ARG_VARIANT};
use clap::{Arg, Command};

pub const ARG_NAME: &str = "name";
pub const ARG_COLOR: &str = "color";

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command.subcommand(
        Command::new("admin")
            .about("Back-office catalog management (admin only)")
            .subcommand_required(true)
            .subcommand(Command::new("colors").about("List colors"))
            .subcommand(Command::new("sizes").about("List sizes"))
            .subcommand(
                Command::new("add-color")
                    .about("Register a color")
                    .arg(Arg::new(ARG_NAME).long(ARG_NAME).required(true))
                    .arg(
                        Arg::new(ARG_COLOR)
                            .long(ARG_COLOR)
                            .help("Swatch value, for example #ff0000")
                            .required(true),
                    ),
            )
            .subcommand(
                Command::new("add-size")
                    .about("Register a size")
                    .arg(Arg::new(ARG_NAME).long(ARG_NAME).required(true)),
            )
            .subcommand(
                Command::new("create-product")
                    .about("Create a product")
                    .arg(json_file("JSON file with the product")),
            )
            .subcommand(
                Command::new("create-variants")
                    .about("Create product variants")
                    .arg(json_file("JSON file with the variants")),
            )
            .subcommand(
                Command::new("add-images")
                    .about("Upload variant images")
                    .arg(json_file("JSON file with the images")),
            )
            .subcommand(
                Command::new("delete-product")
                    .about("Delete a product")
                    .arg(id("Product id")),
            )
            .subcommand(
                Command::new("delete-variant")
                    .about("Delete a product variant")
                    .arg(id("Variant id")),
            )
            .subcommand(
                Command::new("delete-image")
                    .about("Delete a variant image")
                    .arg(id("Image id")),
            )
            .subcommand(
                Command::new("variant")
                    .about("Show a variant in a given size")
                    .arg(
                        Arg::new(ARG_VARIANT)
                            .help("Variant id")
                            .required(true)
                            .value_parser(clap::value_parser!(u64)),
                    )
                    .arg(
                        Arg::new(ARG_SIZE)
                            .help("Size id")
                            .required(true)
                            .value_parser(clap::value_parser!(u64)),
                    ),
            ),
    )
}
