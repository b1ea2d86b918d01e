use serde::{
    Deserialize,
    Serialize,
};

/// Where the fact text lives in the catfact.ninja response.
pub const FACT_POINTER: &str = "/fact";

pub fn fact_url(max_length: u32) -> String {
    format!("https://catfact.ninja/fact?max_length={max_length}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageProvider {
    TheCatApi,
    Cataas,
}

impl ImageProvider {
    pub const ALL: [ImageProvider; 2] = [ImageProvider::TheCatApi, ImageProvider::Cataas];

    pub fn label(&self) -> &'static str {
        match self {
            ImageProvider::TheCatApi => "TheCatAPI",
            ImageProvider::Cataas => "Cataas",
        }
    }

    /// Base origin used to rewrite relative image paths in search responses.
    pub fn origin(&self) -> &'static str {
        match self {
            ImageProvider::TheCatApi => "https://api.thecatapi.com",
            ImageProvider::Cataas => "https://cataas.com",
        }
    }

    pub fn listing_url(&self) -> &'static str {
        match self {
            ImageProvider::TheCatApi => "https://api.thecatapi.com/v1/breeds",
            ImageProvider::Cataas => "https://cataas.com/api/tags",
        }
    }

    /// Where the image URL lives in the search response. TheCatAPI wraps it in
    /// an array whose first element holds it; Cataas returns a bare object.
    pub fn url_pointer(&self) -> &'static str {
        match self {
            ImageProvider::TheCatApi => "/0/url",
            ImageProvider::Cataas => "/url",
        }
    }

    pub fn search_url(&self, category: Option<&str>) -> String {
        match self {
            ImageProvider::TheCatApi => match category {
                Some(id) => {
                    format!("https://api.thecatapi.com/v1/images/search?breed_ids={id}")
                }
                None => "https://api.thecatapi.com/v1/images/search".to_string(),
            },
            ImageProvider::Cataas => match category {
                Some(tag) => format!("https://cataas.com/cat/{tag}?json=true"),
                None => "https://cataas.com/cat?json=true".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_url_carries_max_length() {
        assert_eq!(fact_url(140), "https://catfact.ninja/fact?max_length=140");
    }

    #[test]
    fn thecatapi_search_url() {
        let provider = ImageProvider::TheCatApi;
        assert_eq!(provider.search_url(None), "https://api.thecatapi.com/v1/images/search");
        assert_eq!(
            provider.search_url(Some("beng")),
            "https://api.thecatapi.com/v1/images/search?breed_ids=beng"
        );
    }

    #[test]
    fn cataas_search_url() {
        let provider = ImageProvider::Cataas;
        assert_eq!(provider.search_url(None), "https://cataas.com/cat?json=true");
        assert_eq!(provider.search_url(Some("boxes")), "https://cataas.com/cat/boxes?json=true");
    }
}
