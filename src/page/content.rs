// SPDX-License-Identifier: MPL-2.0
//! Static page copy and the collection catalog.

/// Brand shown in the navbar and window title.
pub const BRAND: &str = "Pardhan Clothing";

pub const HERO_TITLE: &str = "Timeless Style, Crafted with Care";
pub const HERO_SUBTITLE: &str =
    "Discover traditional and contemporary clothing made for every occasion.";
pub const HERO_CTA: &str = "Explore Collections";

pub const ABOUT_TEXT: &str = "Pardhan Clothing has dressed families for three generations. \
Every piece is cut and finished by hand in our own workshop, using fabrics we choose \
ourselves. We believe good clothing should last, feel right, and tell a story.";

pub const CONTACT_ADDRESS: &str = "12 Market Street, Old Town";
pub const CONTACT_PHONE: &str = "+1 (555) 013-2040";
pub const CONTACT_EMAIL: &str = "hello@pardhanclothing.example";
pub const CONTACT_HOURS: &str = "Mon-Sat, 10:00-19:00";

/// A collection shown as a card with artwork and a "View Collection" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionItem {
    pub title: String,
    pub description: String,
    /// Artwork asset key, loaded lazily.
    pub artwork: String,
}

impl CollectionItem {
    fn new(title: &str, description: &str, artwork: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            artwork: artwork.to_string(),
        }
    }

    /// Notification text shown when the collection is opened.
    #[must_use]
    pub fn open_message(&self) -> String {
        open_collection_message(&self.title)
    }
}

/// Text of the "coming soon" notification for a collection.
#[must_use]
pub fn open_collection_message(title: &str) -> String {
    format!("Opening {title} - Coming Soon!")
}

/// A selling point shown in the features grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Everything the page lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub items: Vec<CollectionItem>,
    pub features: Vec<Feature>,
}

impl Catalog {
    /// The storefront's catalog.
    #[must_use]
    pub fn storefront() -> Self {
        let items = vec![
            CollectionItem::new(
                "Traditional Wear",
                "Hand-embroidered kurtas and shalwar kameez for festive days.",
                "traditional.svg",
            ),
            CollectionItem::new(
                "Casual Collection",
                "Breathable cottons and relaxed cuts for everyday comfort.",
                "casual.svg",
            ),
            CollectionItem::new(
                "Formal Attire",
                "Tailored suits and waistcoats for the moments that matter.",
                "formal.svg",
            ),
        ];

        let features = [
            ("Premium Fabrics", "Natural fibres sourced from trusted mills."),
            ("Expert Tailoring", "Every garment finished by our own tailors."),
            ("Custom Fittings", "Alterations included with every purchase."),
            ("Fast Delivery", "Dispatched within two working days."),
        ]
        .into_iter()
        .map(|(title, description)| Feature {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect();

        Self { items, features }
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&CollectionItem> {
        self.items.get(index)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::storefront()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_message_names_the_collection() {
        let catalog = Catalog::storefront();
        let item = catalog.item(0).expect("first item");
        assert_eq!(item.open_message(), "Opening Traditional Wear - Coming Soon!");
    }

    #[test]
    fn catalog_artwork_keys_are_unique() {
        let catalog = Catalog::storefront();
        let mut keys: Vec<_> = catalog.items.iter().map(|i| i.artwork.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), catalog.items.len());
    }
}
