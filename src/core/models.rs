/// One selectable category or breed from a provider's listing endpoint.
/// The default "Random" entry is owned by the UI and never part of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// An image that has already been fetched and decoded. Holding one is the
/// proof of decode success, so the renderer never swaps in a broken reference.
#[derive(Clone)]
pub struct FetchedImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for FetchedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchedImage")
            .field("url", &self.url)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &format!("{} bytes", self.rgba.len()))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Fact,
    Image,
}

impl FetchMode {
    pub fn label(&self) -> &'static str {
        match self {
            FetchMode::Fact => "Cat fact",
            FetchMode::Image => "Cat picture",
        }
    }
}
