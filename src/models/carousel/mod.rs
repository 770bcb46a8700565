use thiserror::Error;

/// A single gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Any URI the egui image loaders understand (`https://`, `file://`, `bytes://`)
    pub uri: String,
    /// Alt text shown while the image loads or if it fails
    pub caption: String,
}

impl ImageRef {
    pub fn new(uri: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            caption: caption.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("a carousel needs at least one image")]
    Empty,
}

/// Ordered, fixed set of images with a single active index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    images: Vec<ImageRef>,
    current_index: usize,
}

impl CarouselState {
    pub fn new(images: Vec<ImageRef>) -> Result<Self, CarouselError> {
        if images.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            images,
            current_index: 0,
        })
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Never true for a constructed carousel.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &ImageRef {
        &self.images[self.current_index]
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current_index
    }

    /// Move to the next image, wrapping after the last one.
    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.images.len();
    }

    /// Jump straight to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position. Callers only offer one
    /// control per image, so an out-of-range index is a bug.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.images.len(),
            "carousel index {} out of range for {} images",
            index,
            self.images.len()
        );
        self.current_index = index;
    }
}
