use serde::{Deserialize, Serialize};

/// A set of tags, one bit per tag.
pub type TagMask = u32;

/// Tags are bits of a [`TagMask`], the top bit is never used.
pub const MAX_TAGS: usize = 31;

/// Wrapper struct holding the labels of the configured tags.
///
/// The position of a label is meaningful: the label at index `i` names the tag `1 << i`. The
/// number of tags is fixed once the compositor starts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Tags {
    labels: Vec<String>,
}

impl Tags {
    /// Build the tag list from labels. Labels past [`MAX_TAGS`] are dropped, an empty list gets a
    /// single unnamed tag.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        let mut labels = labels;
        if labels.len() > MAX_TAGS {
            tracing::warn!("Only {MAX_TAGS} tags are supported, ignoring the rest");
            labels.truncate(MAX_TAGS);
        }
        if labels.is_empty() {
            labels.push("1".to_string());
        }
        Self { labels }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The mask holding every configured tag.
    #[must_use]
    pub fn mask(&self) -> TagMask {
        mask_for_count(self.labels.len())
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Mask with the lowest `count` bits set.
#[must_use]
pub fn mask_for_count(count: usize) -> TagMask {
    let count = count.min(MAX_TAGS);
    (1u32 << count) - 1
}
