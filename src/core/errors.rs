use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(Box<reqwest::Error>),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("image decode failed: {0}")]
    Decode(Box<image::ImageError>),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Request(Box::new(error))
    }
}

impl From<image::ImageError> for FetchError {
    fn from(error: image::ImageError) -> Self {
        FetchError::Decode(Box::new(error))
    }
}
