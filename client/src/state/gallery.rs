//! Gallery view-model: category filtering and the item detail modal.
//!
//! DESIGN
//! ======
//! `GalleryState` is a value type. Every user interaction is a
//! `GalleryEvent`, and `GalleryState::reduce` maps `(state, event)` to the
//! next state. The page keeps the current state in a signal and re-renders
//! from it, so the transition rules are testable without a DOM.
//!
//! Category and selection are independent: changing the filter leaves an
//! open item open, and closing the modal keeps the filter.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Filter entry that disables category filtering.
pub const ALL_CATEGORY: &str = "All";

/// One gallery tile. Fixture data only; never created at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Glyph rendered as the tile artwork.
    pub icon: &'static str,
    /// Color token appended to the tile's CSS modifier class.
    pub color_token: &'static str,
    pub year: &'static str,
}

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        title: "Main Office",
        description: "The accounting office where every disbursement voucher starts its journey.",
        category: "Infrastructure",
        icon: "🏢",
        color_token: "blue",
        year: "2019",
    },
    GalleryItem {
        id: 2,
        title: "Finance Division",
        description: "Budget officers reviewing obligations before vouchers move to approval.",
        category: "Finance",
        icon: "💰",
        color_token: "green",
        year: "2020",
    },
    GalleryItem {
        id: 3,
        title: "Document Processing",
        description: "Incoming vouchers are logged, checked for attachments, and routed.",
        category: "Operations",
        icon: "📄",
        color_token: "amber",
        year: "2021",
    },
    GalleryItem {
        id: 4,
        title: "Voucher Archive",
        description: "Released vouchers filed by fiscal year for audit retrieval.",
        category: "Operations",
        icon: "🗄️",
        color_token: "slate",
        year: "2021",
    },
    GalleryItem {
        id: 5,
        title: "Research & Development",
        description: "Prototyping the digital tracker that replaced the paper logbook.",
        category: "Research",
        icon: "🔬",
        color_token: "purple",
        year: "2022",
    },
    GalleryItem {
        id: 6,
        title: "Team Building",
        description: "The processing team at the annual planning retreat.",
        category: "Community",
        icon: "🤝",
        color_token: "pink",
        year: "2022",
    },
    GalleryItem {
        id: 7,
        title: "Digital Transformation",
        description: "Rolling out online voucher tracking to every division.",
        category: "Technology",
        icon: "💻",
        color_token: "cyan",
        year: "2023",
    },
    GalleryItem {
        id: 8,
        title: "Excellence Award",
        description: "Recognized for cutting voucher turnaround time in half.",
        category: "Recognition",
        icon: "🏆",
        color_token: "yellow",
        year: "2024",
    },
];

/// Filter entries for `items`: `"All"` first, then each distinct category in
/// order of first appearance.
pub fn categories(items: &[GalleryItem]) -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORY];
    for item in items {
        if !out.contains(&item.category) {
            out.push(item.category);
        }
    }
    out
}

/// Items shown for `selected`, in fixture order.
///
/// An unknown category yields nothing; it does not fall back to `"All"`.
pub fn visible_items<'a>(items: &'a [GalleryItem], selected: &'a str) -> impl Iterator<Item = &'a GalleryItem> + 'a {
    items
        .iter()
        .filter(move |item| selected == ALL_CATEGORY || item.category == selected)
}

/// Detail modal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(GalleryItem),
}

impl Selection {
    pub fn item(&self) -> Option<&GalleryItem> {
        match self {
            Self::Closed => None,
            Self::Open(item) => Some(item),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// User interactions on the gallery page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    SelectCategory(String),
    ClickItem(GalleryItem),
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub selected_category: String,
    pub selection: Selection,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { selected_category: ALL_CATEGORY.to_owned(), selection: Selection::Closed }
    }
}

impl GalleryState {
    /// Apply one event. Total over every `(state, event)` pair.
    #[must_use]
    pub fn reduce(self, event: GalleryEvent) -> Self {
        match event {
            GalleryEvent::SelectCategory(category) => Self { selected_category: category, ..self },
            GalleryEvent::ClickItem(item) => Self { selection: Selection::Open(item), ..self },
            GalleryEvent::Close => Self { selection: Selection::Closed, ..self },
        }
    }

    pub fn visible<'a>(&'a self, items: &'a [GalleryItem]) -> impl Iterator<Item = &'a GalleryItem> + 'a {
        visible_items(items, &self.selected_category)
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected_category == category
    }
}
