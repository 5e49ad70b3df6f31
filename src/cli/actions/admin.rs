use crate::api::catalog;
use crate::cli::{
    actions::{print_json, read_json, require_view},
    globals::GlobalArgs,
};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Command {
    Colors,
    Sizes,
    AddColor { name: String, color: String },
    AddSize { name: String },
    CreateProduct { file: PathBuf },
    CreateVariants { file: PathBuf },
    AddImages { file: PathBuf },
    DeleteProduct { product_id: u64 },
    DeleteVariant { variant_id: u64 },
    DeleteImage { image_id: u64 },
    Variant { variant_id: u64, size_id: u64 },
}

impl Command {
    /// Back-office view the command belongs to.
    const fn view(&self) -> &'static str {
        match self {
            Self::Colors | Self::AddColor { .. } => "/Admin/AddColor",
            Self::Sizes | Self::AddSize { .. } => "/Admin/AddSize",
            Self::CreateProduct { .. } => "/Admin/AddProduct",
            Self::CreateVariants { .. } => "/Admin/AddProductColor",
            Self::AddImages { .. } => "/Admin/AddProductImage",
            Self::DeleteProduct { .. } | Self::DeleteVariant { .. } | Self::DeleteImage { .. } => {
                "/Admin/AdminProducts"
            }
            Self::Variant { .. } => "/Admin/Orders",
        }
    }
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a back-office action.
/// # Errors
/// Returns an error if the session is not an admin one or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, command } = args;
    let store = globals.session_store();
    require_view(store.session(), command.view())?;
    let client = globals.client(store.session())?;

    let value = match command {
        Command::Colors => catalog::colors(&client).await?,
        Command::Sizes => catalog::sizes(&client).await?,
        Command::AddColor { name, color } => catalog::add_color(&client, &name, &color).await?,
        Command::AddSize { name } => catalog::add_size(&client, &name).await?,
        Command::CreateProduct { file } => {
            catalog::create_product(&client, &read_json(&file)?).await?
        }
        Command::CreateVariants { file } => {
            catalog::create_variants(&client, &read_json(&file)?).await?
        }
        Command::AddImages { file } => {
            catalog::create_variant_images(&client, &read_json(&file)?).await?
        }
        Command::DeleteProduct { product_id } => {
            catalog::delete_product(&client, product_id).await?
        }
        Command::DeleteVariant { variant_id } => {
            catalog::delete_variant(&client, variant_id).await?
        }
        Command::DeleteImage { image_id } => catalog::delete_image(&client, image_id).await?,
        Command::Variant {
            variant_id,
            size_id,
        } => catalog::variant_details(&client, variant_id, size_id).await?,
    };

    print_json(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{resolve, Protection};

    #[test]
    fn every_command_is_behind_an_admin_view() {
        let commands = [
            Command::Colors,
            Command::Sizes,
            Command::AddColor {
                name: "Red".to_string(),
                color: "#ff0000".to_string(),
            },
            Command::AddSize {
                name: "XL".to_string(),
            },
            Command::CreateProduct {
                file: PathBuf::from("-"),
            },
            Command::CreateVariants {
                file: PathBuf::from("-"),
            },
            Command::AddImages {
                file: PathBuf::from("-"),
            },
            Command::DeleteProduct { product_id: 1 },
            Command::DeleteVariant { variant_id: 1 },
            Command::DeleteImage { image_id: 1 },
            Command::Variant {
                variant_id: 1,
                size_id: 1,
            },
        ];
        for command in commands {
            let protection = resolve(command.view()).map(|m| m.route.protection);
            assert_eq!(protection, Some(Protection::AdminOnly), "{command:?}");
        }
    }
}
