use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Display-ready image reference (already resolved to a URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ImageRef {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered images for one product, with optional per-variant overrides.
///
/// The active list is re-derived from `base` and `variants` every time the
/// selected variant changes; it is never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    base: Vec<ImageRef>,
    variants: HashMap<String, Vec<ImageRef>>,
    variant_key: Option<String>,
    active: Vec<ImageRef>,
}

impl ImageSet {
    pub fn new(base: Vec<ImageRef>, variants: HashMap<String, Vec<ImageRef>>) -> Self {
        let active = base.clone();
        Self {
            base,
            variants,
            variant_key: None,
            active,
        }
    }

    /// Build from plain URL strings, as handed over by the product page.
    pub fn from_urls<I, S>(base: I, variants: HashMap<String, Vec<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base = base.into_iter().map(|s| ImageRef::new(s)).collect();
        let variants = variants
            .into_iter()
            .map(|(key, urls)| (key, urls.into_iter().map(ImageRef::from).collect()))
            .collect();
        Self::new(base, variants)
    }

    /// Select a variant and re-derive the active list.
    ///
    /// Returns `true` if the active list changed.
    pub fn select_variant(&mut self, key: Option<String>) -> bool {
        self.variant_key = key;
        let next = self.resolve();
        if next == self.active {
            return false;
        }
        log::debug!(
            "Active image set changed: variant={:?}, {} -> {} images",
            self.variant_key,
            self.active.len(),
            next.len()
        );
        self.active = next;
        true
    }

    /// Swap in another product's images. Clears the variant selection.
    pub fn replace(&mut self, base: Vec<ImageRef>, variants: HashMap<String, Vec<ImageRef>>) {
        *self = Self::new(base, variants);
    }

    fn resolve(&self) -> Vec<ImageRef> {
        self.variant_key
            .as_ref()
            .and_then(|key| self.variants.get(key))
            .filter(|images| !images.is_empty())
            .unwrap_or(&self.base)
            .clone()
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.active
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.active.get(index)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn variant_key(&self) -> Option<&str> {
        self.variant_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(urls: &[&str]) -> Vec<ImageRef> {
        urls.iter().map(|u| ImageRef::from(*u)).collect()
    }

    fn shirt() -> ImageSet {
        let mut variants = HashMap::new();
        variants.insert("red".to_string(), refs(&["red-1.jpg", "red-2.jpg"]));
        variants.insert("blue".to_string(), Vec::new());
        variants.insert("navy".to_string(), refs(&["base-1.jpg", "base-2.jpg", "base-3.jpg"]));
        ImageSet::new(refs(&["base-1.jpg", "base-2.jpg", "base-3.jpg"]), variants)
    }

    #[test]
    fn starts_on_base_list() {
        let set = shirt();
        assert_eq!(set.len(), 3);
        assert_eq!(set.variant_key(), None);
        assert_eq!(set.get(0).map(ImageRef::as_str), Some("base-1.jpg"));
    }

    #[test]
    fn variant_with_images_becomes_active() {
        let mut set = shirt();
        assert!(set.select_variant(Some("red".into())));
        assert_eq!(set.images(), refs(&["red-1.jpg", "red-2.jpg"]).as_slice());
        assert_eq!(set.variant_key(), Some("red"));
    }

    #[test]
    fn empty_variant_falls_back_to_base() {
        let mut set = shirt();
        set.select_variant(Some("red".into()));
        assert!(set.select_variant(Some("blue".into())));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn unknown_variant_falls_back_to_base() {
        let mut set = shirt();
        assert!(!set.select_variant(Some("green".into())));
        assert_eq!(set.variant_key(), Some("green"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn identical_variant_list_is_not_a_change() {
        let mut set = shirt();
        assert!(!set.select_variant(Some("navy".into())));
    }

    #[test]
    fn replace_clears_variant() {
        let mut set = shirt();
        set.select_variant(Some("red".into()));
        set.replace(refs(&["other.jpg"]), HashMap::new());
        assert_eq!(set.variant_key(), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_set_is_valid() {
        let set = ImageSet::default();
        assert!(set.is_empty());
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn from_urls_builds_refs() {
        let mut variants = HashMap::new();
        variants.insert("red".to_string(), vec!["r.jpg".to_string()]);
        let mut set = ImageSet::from_urls(["a.jpg", "b.jpg"], variants);
        assert_eq!(set.len(), 2);
        set.select_variant(Some("red".into()));
        assert_eq!(set.images(), refs(&["r.jpg"]).as_slice());
    }

    #[test]
    fn image_ref_serializes_as_plain_string() {
        let json = serde_json::to_string(&ImageRef::from("a.jpg")).unwrap();
        assert_eq!(json, "\"a.jpg\"");
    }
}
