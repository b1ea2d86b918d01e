use crate::{
    api::providers::ImageProvider,
    core::{
        CategoryOption,
        FetchError,
        FetchedImage,
    },
};

/// Everything a background task can hand back to the GUI loop. Fetch results
/// carry the sequence number of the dispatch that started them so the app can
/// drop responses that a later action has superseded.
#[derive(Debug)]
pub enum TaskResult {
    Categories { provider: ImageProvider, options: Vec<CategoryOption> },
    Fact { seq: u64, result: Result<String, FetchError> },
    Image { seq: u64, result: Result<FetchedImage, FetchError> },
}
