use std::collections::BTreeSet;

/// How a photo is shot, which decides how it can be placed on a slide.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A photo from an input collection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Zero-based position in the input file
    pub id: usize,
    pub orientation: Orientation,
    pub tags: BTreeSet<String>,
}

impl Photo {
    pub fn new(id: usize, orientation: Orientation, tags: BTreeSet<String>) -> Self {
        Self {
            id,
            orientation,
            tags,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }
}

/// Which photos a slide shows.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// One horizontal photo
    Single(usize),
    /// Two vertical photos
    Pair(usize, usize),
}

/// A slide: one horizontal photo, or two vertical photos with their
/// tag sets unioned.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub layout: SlideLayout,
    pub tags: BTreeSet<String>,
}

impl Slide {
    pub fn single(photo: Photo) -> Self {
        Self {
            layout: SlideLayout::Single(photo.id),
            tags: photo.tags,
        }
    }

    pub fn pair(first: Photo, second: Photo) -> Self {
        let mut tags = first.tags;
        tags.extend(second.tags);
        Self {
            layout: SlideLayout::Pair(first.id, second.id),
            tags,
        }
    }
}
