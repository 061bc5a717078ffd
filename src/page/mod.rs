// SPDX-License-Identifier: MPL-2.0
//! Storefront page model.
//!
//! The page is laid out deterministically from the viewport width: every
//! section and every animated block has a known rectangle in page coordinates.
//! The view renders with the same measurements, so visibility checks can run
//! against the model instead of querying widgets.
//!
//! - [`content`] - Static page copy and the collection catalog
//! - [`navigation`] - Section anchors and smooth scrolling
//! - [`contact`] - Contact form state and validation
//! - [`parallax`] - Hero parallax offset
//! - [`artwork`] - Embedded collection artwork

pub mod artwork;
pub mod contact;
pub mod content;
pub mod navigation;
pub mod parallax;

pub use content::Catalog;

use iced::Rectangle;
use std::fmt;

// ==========================================================================
// Layout Metrics
// ==========================================================================

/// Height of the hero section.
pub const HERO_HEIGHT: f32 = 600.0;
/// Vertical padding at the top and bottom of every content section.
pub const SECTION_PADDING: f32 = 64.0;
/// Height reserved for a section heading.
pub const SECTION_HEADER_HEIGHT: f32 = 80.0;
/// Horizontal padding on each side of section content.
pub const SIDE_PADDING: f32 = 24.0;
/// Maximum width of section content.
pub const MAX_CONTENT_WIDTH: f32 = 1200.0;
/// Gap between grid cells.
pub const GRID_GAP: f32 = 24.0;

pub const COLLECTION_CARD_HEIGHT: f32 = 360.0;
pub const COLLECTION_MIN_WIDTH: f32 = 280.0;
pub const COLLECTION_MAX_COLUMNS: usize = 3;
/// Artwork area at the top of a collection card.
pub const ARTWORK_HEIGHT: f32 = 200.0;

pub const FEATURE_CARD_HEIGHT: f32 = 200.0;
pub const FEATURE_MIN_WIDTH: f32 = 220.0;
pub const FEATURE_MAX_COLUMNS: usize = 4;

pub const ABOUT_TEXT_HEIGHT: f32 = 240.0;

pub const CONTACT_INFO_HEIGHT: f32 = 260.0;
pub const CONTACT_FORM_HEIGHT: f32 = 420.0;
/// Contact info and form sit side by side above this width.
pub const CONTACT_SPLIT_WIDTH: f32 = 768.0;

// ==========================================================================
// Identifiers
// ==========================================================================

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Collections,
    Features,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Collections,
        SectionId::Features,
        SectionId::About,
        SectionId::Contact,
    ];

    /// Anchor name, without the leading `#`.
    #[must_use]
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Collections => "collections",
            SectionId::Features => "features",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Collections => "Collections",
            SectionId::Features => "Features",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    /// Resolves `home` or `#home` style anchors.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let name = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|id| id.anchor() == name)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.anchor())
    }
}

/// Blocks that fade in on first visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    CollectionItem(usize),
    Feature(usize),
    AboutText,
    ContactInfo,
    ContactForm,
}

/// A laid out section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub offset_top: f32,
    pub height: f32,
}

// ==========================================================================
// Layout
// ==========================================================================

/// Number of grid columns that fit `width` with at least `min_cell` per cell.
#[must_use]
pub fn grid_columns(width: f32, min_cell: f32, max_columns: usize) -> usize {
    let fit = ((width + GRID_GAP) / (min_cell + GRID_GAP)).floor();
    (fit.max(1.0) as usize).min(max_columns.max(1))
}

/// Height of a grid with `count` cells laid out in `columns` columns.
fn grid_height(count: usize, columns: usize, cell_height: f32) -> f32 {
    let rows = count.div_ceil(columns.max(1));
    if rows == 0 {
        return 0.0;
    }
    rows as f32 * cell_height + (rows - 1) as f32 * GRID_GAP
}

/// Rectangles of `count` grid cells starting at (`x`, `y`).
fn grid_cells(
    count: usize,
    columns: usize,
    x: f32,
    y: f32,
    width: f32,
    cell_height: f32,
) -> Vec<Rectangle> {
    let columns = columns.max(1);
    let cell_width = (width - (columns - 1) as f32 * GRID_GAP) / columns as f32;

    (0..count)
        .map(|index| {
            let row = index / columns;
            let column = index % columns;
            Rectangle {
                x: x + column as f32 * (cell_width + GRID_GAP),
                y: y + row as f32 * (cell_height + GRID_GAP),
                width: cell_width,
                height: cell_height,
            }
        })
        .collect()
}

/// Page geometry for a given viewport width.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    width: f32,
    content_x: f32,
    content_width: f32,
    collection_columns: usize,
    feature_columns: usize,
    sections: Vec<Section>,
    blocks: Vec<(BlockId, Rectangle)>,
    artwork_slots: Vec<(usize, Rectangle)>,
}

impl Layout {
    /// Lays out the page for a viewport `width` pixels wide.
    #[must_use]
    pub fn compute(width: f32, catalog: &Catalog) -> Self {
        let width = width.max(1.0);
        let content_width = (width - 2.0 * SIDE_PADDING).clamp(1.0, MAX_CONTENT_WIDTH);
        let content_x = ((width - content_width) / 2.0).max(0.0);

        let collection_columns =
            grid_columns(content_width, COLLECTION_MIN_WIDTH, COLLECTION_MAX_COLUMNS);
        let feature_columns = grid_columns(content_width, FEATURE_MIN_WIDTH, FEATURE_MAX_COLUMNS);

        let mut sections = Vec::with_capacity(SectionId::ALL.len());
        let mut blocks = Vec::new();
        let mut artwork_slots = Vec::new();
        let mut top = 0.0;

        // Hero
        sections.push(Section {
            id: SectionId::Home,
            offset_top: top,
            height: HERO_HEIGHT,
        });
        top += HERO_HEIGHT;

        // Collections
        let body_top = top + SECTION_PADDING + SECTION_HEADER_HEIGHT;
        let cells = grid_cells(
            catalog.items.len(),
            collection_columns,
            content_x,
            body_top,
            content_width,
            COLLECTION_CARD_HEIGHT,
        );
        for (index, cell) in cells.into_iter().enumerate() {
            blocks.push((BlockId::CollectionItem(index), cell));
            artwork_slots.push((
                index,
                Rectangle {
                    height: ARTWORK_HEIGHT,
                    ..cell
                },
            ));
        }
        let height = 2.0 * SECTION_PADDING
            + SECTION_HEADER_HEIGHT
            + grid_height(
                catalog.items.len(),
                collection_columns,
                COLLECTION_CARD_HEIGHT,
            );
        sections.push(Section {
            id: SectionId::Collections,
            offset_top: top,
            height,
        });
        top += height;

        // Features
        let body_top = top + SECTION_PADDING + SECTION_HEADER_HEIGHT;
        let cells = grid_cells(
            catalog.features.len(),
            feature_columns,
            content_x,
            body_top,
            content_width,
            FEATURE_CARD_HEIGHT,
        );
        blocks.extend(
            cells
                .into_iter()
                .enumerate()
                .map(|(index, cell)| (BlockId::Feature(index), cell)),
        );
        let height = 2.0 * SECTION_PADDING
            + SECTION_HEADER_HEIGHT
            + grid_height(catalog.features.len(), feature_columns, FEATURE_CARD_HEIGHT);
        sections.push(Section {
            id: SectionId::Features,
            offset_top: top,
            height,
        });
        top += height;

        // About
        let body_top = top + SECTION_PADDING + SECTION_HEADER_HEIGHT;
        blocks.push((
            BlockId::AboutText,
            Rectangle {
                x: content_x,
                y: body_top,
                width: content_width,
                height: ABOUT_TEXT_HEIGHT,
            },
        ));
        let height = 2.0 * SECTION_PADDING + SECTION_HEADER_HEIGHT + ABOUT_TEXT_HEIGHT;
        sections.push(Section {
            id: SectionId::About,
            offset_top: top,
            height,
        });
        top += height;

        // Contact
        let body_top = top + SECTION_PADDING + SECTION_HEADER_HEIGHT;
        let body_height = if width > CONTACT_SPLIT_WIDTH {
            let half = (content_width - GRID_GAP) / 2.0;
            blocks.push((
                BlockId::ContactInfo,
                Rectangle {
                    x: content_x,
                    y: body_top,
                    width: half,
                    height: CONTACT_INFO_HEIGHT,
                },
            ));
            blocks.push((
                BlockId::ContactForm,
                Rectangle {
                    x: content_x + half + GRID_GAP,
                    y: body_top,
                    width: half,
                    height: CONTACT_FORM_HEIGHT,
                },
            ));
            CONTACT_INFO_HEIGHT.max(CONTACT_FORM_HEIGHT)
        } else {
            blocks.push((
                BlockId::ContactInfo,
                Rectangle {
                    x: content_x,
                    y: body_top,
                    width: content_width,
                    height: CONTACT_INFO_HEIGHT,
                },
            ));
            blocks.push((
                BlockId::ContactForm,
                Rectangle {
                    x: content_x,
                    y: body_top + CONTACT_INFO_HEIGHT + GRID_GAP,
                    width: content_width,
                    height: CONTACT_FORM_HEIGHT,
                },
            ));
            CONTACT_INFO_HEIGHT + GRID_GAP + CONTACT_FORM_HEIGHT
        };
        sections.push(Section {
            id: SectionId::Contact,
            offset_top: top,
            height: 2.0 * SECTION_PADDING + SECTION_HEADER_HEIGHT + body_height,
        });

        Self {
            width,
            content_x,
            content_width,
            collection_columns,
            feature_columns,
            sections,
            blocks,
            artwork_slots,
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    #[must_use]
    pub fn content_x(&self) -> f32 {
        self.content_x
    }

    #[must_use]
    pub fn collection_columns(&self) -> usize {
        self.collection_columns
    }

    #[must_use]
    pub fn feature_columns(&self) -> usize {
        self.feature_columns
    }

    /// Whether contact info and form are laid out side by side.
    #[must_use]
    pub fn contact_side_by_side(&self) -> bool {
        self.width > CONTACT_SPLIT_WIDTH
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    #[must_use]
    pub fn block(&self, id: BlockId) -> Option<Rectangle> {
        self.blocks
            .iter()
            .find(|(block, _)| *block == id)
            .map(|(_, bounds)| *bounds)
    }

    /// Every block that fades in, in document order.
    pub fn animated_blocks(&self) -> impl Iterator<Item = (BlockId, Rectangle)> + '_ {
        self.blocks.iter().copied()
    }

    /// Artwork placeholders of collection items, keyed by item index.
    pub fn artwork_slots(&self) -> impl Iterator<Item = (usize, Rectangle)> + '_ {
        self.artwork_slots.iter().copied()
    }

    /// Total page height.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.sections
            .last()
            .map_or(0.0, |section| section.offset_top + section.height)
    }

    /// Largest valid scroll offset for a viewport `viewport_height` tall.
    #[must_use]
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.total_height() - viewport_height).max(0.0)
    }
}
