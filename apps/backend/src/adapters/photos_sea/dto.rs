//! DTOs for photos_sea adapter.

/// Fields a client may set on a photo.
#[derive(Debug, Clone)]
pub struct PhotoWrite {
    pub title: String,
    pub caption: String,
    pub photo_url: String,
}

impl PhotoWrite {
    pub fn new(title: impl Into<String>, photo_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: String::new(),
            photo_url: photo_url.into(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}
