// SPDX-License-Identifier: MPL-2.0
//! Gallery content: the ordered item list a project page hands to the viewer.
//!
//! Items are immutable once loaded. Only items carrying a URL and both
//! dimensions are *eligible*, i.e. clickable and reachable by navigation.

pub mod manifest;
pub mod source;

pub use manifest::{
    load_manifest, parse_manifest, Manifest, Project, ProjectEntry, ProjectLink, ProjectType,
    Visibility,
};
pub use source::ImageSource;

use serde::Deserialize;

/// One gallery entry as published by the content source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl GalleryItem {
    /// Returns the intrinsic size when both dimensions are known and non-zero.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
            _ => None,
        }
    }

    /// Whether the item can be opened in the viewer.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.trim().is_empty()) && self.dimensions().is_some()
    }

    /// Aspect ratio (width / height) for laying out the figure.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        self.dimensions().map(|(w, h)| w as f32 / h as f32)
    }
}

/// Ordered item list plus the precomputed positions of eligible items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    eligible: Vec<usize>,
}

impl Gallery {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let eligible = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_eligible())
            .map(|(index, _)| index)
            .collect();
        Self { items, eligible }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item indices that may be opened, in display order.
    #[must_use]
    pub fn eligible_indices(&self) -> &[usize] {
        &self.eligible
    }

    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.eligible.len()
    }

    #[must_use]
    pub fn is_eligible(&self, index: usize) -> bool {
        self.eligible.binary_search(&index).is_ok()
    }

    /// 1-based position of `index` among eligible items, for the counter.
    #[must_use]
    pub fn eligible_position(&self, index: usize) -> Option<usize> {
        self.eligible.binary_search(&index).ok().map(|pos| pos + 1)
    }

    /// Eligible index following `index`, wrapping from last to first.
    #[must_use]
    pub fn next_eligible(&self, index: usize) -> Option<usize> {
        let pos = self.eligible.binary_search(&index).ok()?;
        let next = if pos + 1 == self.eligible.len() { 0 } else { pos + 1 };
        Some(self.eligible[next])
    }

    /// Eligible index preceding `index`, wrapping from first to last.
    #[must_use]
    pub fn previous_eligible(&self, index: usize) -> Option<usize> {
        let pos = self.eligible.binary_search(&index).ok()?;
        let previous = if pos == 0 { self.eligible.len() - 1 } else { pos - 1 };
        Some(self.eligible[previous])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn item(url: &str, width: Option<u32>, height: Option<u32>) -> GalleryItem {
        GalleryItem {
            url: Some(url.to_string()),
            width,
            height,
            ..GalleryItem::default()
        }
    }

    pub(crate) fn sized(count: usize) -> Gallery {
        Gallery::new(
            (0..count)
                .map(|i| item(&format!("img-{i}.jpg"), Some(800), Some(600)))
                .collect(),
        )
    }

    #[test]
    fn eligibility_requires_url_and_both_dimensions() {
        assert!(item("a.jpg", Some(10), Some(10)).is_eligible());
        assert!(!item("a.jpg", None, Some(10)).is_eligible());
        assert!(!item("a.jpg", Some(10), None).is_eligible());
        assert!(!item("a.jpg", Some(0), Some(10)).is_eligible());
        assert!(!item("  ", Some(10), Some(10)).is_eligible());
        assert!(!GalleryItem {
            width: Some(10),
            height: Some(10),
            ..GalleryItem::default()
        }
        .is_eligible());
    }

    #[test]
    fn eligible_indices_skip_incomplete_items() {
        let gallery = Gallery::new(vec![
            item("a.jpg", Some(4), Some(3)),
            item("b.jpg", None, Some(3)),
            item("c.jpg", Some(4), Some(3)),
        ]);
        assert_eq!(gallery.eligible_indices(), &[0, 2]);
        assert_eq!(gallery.eligible_position(2), Some(2));
        assert_eq!(gallery.eligible_position(1), None);
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let gallery = sized(3);
        assert_eq!(gallery.next_eligible(2), Some(0));
        assert_eq!(gallery.previous_eligible(0), Some(2));
        assert_eq!(gallery.next_eligible(0), Some(1));
    }

    #[test]
    fn navigation_skips_ineligible_items() {
        let gallery = Gallery::new(vec![
            item("a.jpg", Some(4), Some(3)),
            item("b.jpg", None, None),
            item("c.jpg", Some(4), Some(3)),
        ]);
        assert_eq!(gallery.next_eligible(0), Some(2));
        assert_eq!(gallery.previous_eligible(0), Some(2));
    }

    #[test]
    fn single_item_navigation_returns_itself() {
        let gallery = sized(1);
        assert_eq!(gallery.next_eligible(0), Some(0));
        assert_eq!(gallery.previous_eligible(0), Some(0));
    }

    #[test]
    fn aspect_ratio_uses_dimensions() {
        let ratio = item("a.jpg", Some(1600), Some(800)).aspect_ratio();
        assert_eq!(ratio, Some(2.0));
    }
}
