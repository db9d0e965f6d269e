//! Slide discovery and the ordered deck it produces.

pub mod discovery;

pub use discovery::discover;

use crate::scene::ObjectId;

/// Ordered list of slide objects. Immutable until the next rescan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<ObjectId>,
}

impl SlideDeck {
    /// Deck over `slides` in the given order.
    #[must_use]
    pub fn new(slides: Vec<ObjectId>) -> Self {
        Self { slides }
    }

    /// Deck with no slides.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at deck index `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ObjectId> {
        self.slides.get(index).copied()
    }

    /// Slides in deck order.
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.slides.iter().copied()
    }

    /// Deck index of `id`, if it is a slide.
    #[must_use]
    pub fn position(&self, id: ObjectId) -> Option<usize> {
        self.slides.iter().position(|&slide| slide == id)
    }

    /// Slides as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ObjectId] {
        &self.slides
    }

    /// Largest valid index, or `None` when empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.slides.len().checked_sub(1)
    }
}

impl<'a> IntoIterator for &'a SlideDeck {
    type Item = &'a ObjectId;
    type IntoIter = std::slice::Iter<'a, ObjectId>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
