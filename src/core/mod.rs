pub mod errors;
pub mod http;
pub mod models;
pub mod tasks;

pub use errors::FetchError;
pub use models::{
    CategoryOption,
    FetchMode,
    FetchedImage,
};
