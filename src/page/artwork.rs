// SPDX-License-Identifier: MPL-2.0
//! Embedded collection artwork.

use crate::error::{Error, Result};
use iced::widget::svg;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/collections/"]
struct CollectionArt;

/// Resolves an artwork key to an SVG handle.
pub fn load(key: &str) -> Result<svg::Handle> {
    CollectionArt::get(key)
        .map(|file| svg::Handle::from_memory(file.data.into_owned()))
        .ok_or_else(|| Error::MissingAsset(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Catalog;

    #[test]
    fn catalog_artwork_is_embedded() {
        for item in Catalog::storefront().items {
            assert!(load(&item.artwork).is_ok(), "missing {}", item.artwork);
        }
    }

    #[test]
    fn unknown_key_is_missing_asset() {
        assert!(matches!(load("nope.svg"), Err(Error::MissingAsset(key)) if key == "nope.svg"));
    }
}
