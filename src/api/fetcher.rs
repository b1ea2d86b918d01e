use reqwest::{
    Client,
    StatusCode,
    Url,
};
use serde_json::Value;

use crate::core::{
    FetchError,
    FetchedImage,
};

/// Fetch a JSON document and pull one string field out of it.
///
/// A non-success status fails before the body is ever parsed. The field is
/// addressed by JSON Pointer (`/fact`, `/0/url`) and returned unmodified.
pub async fn fetch_text(client: &Client, url: &str, pointer: &str) -> Result<String, FetchError> {
    let (status, body) = fetch_body(client, url).await?;
    text_from_response(status, &body, pointer)
}

/// Fetch an image search response, resolve the image URL it points at, then
/// fetch and decode the image itself before reporting success.
///
/// The decode step is what keeps the UI flicker-free: a `FetchedImage` only
/// exists for bytes that already rendered off-screen, so a broken resource
/// surfaces as `Decode` instead of a broken picture.
pub async fn fetch_image(
    client: &Client,
    url: &str,
    pointer: &str,
    origin: &str,
) -> Result<FetchedImage, FetchError> {
    let (status, body) = fetch_body(client, url).await?;
    let image_url = image_url_from_response(status, &body, pointer, origin)?;

    let response = client.get(&image_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    verify_image(&image_url, &bytes)
}

pub(crate) async fn fetch_body(
    client: &Client,
    url: &str,
) -> Result<(StatusCode, String), FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn text_from_response(
    status: StatusCode,
    body: &str,
    pointer: &str,
) -> Result<String, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    extract_text(body, pointer)
}

fn image_url_from_response(
    status: StatusCode,
    body: &str,
    pointer: &str,
    origin: &str,
) -> Result<String, FetchError> {
    let raw = text_from_response(status, body, pointer)?;
    if raw.is_empty() {
        return Err(FetchError::Malformed(format!("field {pointer} is empty")));
    }
    absolutize(origin, &raw)
}

fn extract_text(body: &str, pointer: &str) -> Result<String, FetchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::Malformed(format!("body is not JSON: {e}")))?;

    match value.pointer(pointer) {
        Some(Value::String(content)) => Ok(content.clone()),
        Some(other) => {
            Err(FetchError::Malformed(format!("field {pointer} is not a string: {other}")))
        }
        None => Err(FetchError::Malformed(format!("field {pointer} is missing"))),
    }
}

// Cataas hands back paths like "/cat/abc123"; absolute URLs pass through.
fn absolutize(origin: &str, raw: &str) -> Result<String, FetchError> {
    let url = if raw.starts_with("http://") || raw.starts_with("https://") {
        Url::parse(raw)
    } else {
        Url::parse(origin).and_then(|base| base.join(raw))
    };

    url.map(|u| u.to_string())
        .map_err(|e| FetchError::Malformed(format!("bad image url {raw}: {e}")))
}

fn verify_image(url: &str, bytes: &[u8]) -> Result<FetchedImage, FetchError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(FetchedImage { url: url.to_string(), width, height, rgba: rgba.into_raw() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_field_is_returned_unmodified() {
        let body = r#"{"fact":"Cats sleep 70% of their lives.","length":30}"#;
        let fact = text_from_response(StatusCode::OK, body, "/fact").unwrap();
        assert_eq!(fact, "Cats sleep 70% of their lives.");
    }

    #[test]
    fn pointer_reaches_into_arrays() {
        let body = r#"[{"id":"abc","url":"https://cdn2.thecatapi.com/images/abc.jpg"}]"#;
        let url = text_from_response(StatusCode::OK, body, "/0/url").unwrap();
        assert_eq!(url, "https://cdn2.thecatapi.com/images/abc.jpg");
    }

    #[test]
    fn non_success_status_wins_over_the_body() {
        // The body is garbage on purpose: a failing status must short-circuit
        // before any JSON parsing happens.
        let result = text_from_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops", "/fact");
        assert!(matches!(result, Err(FetchError::Status(500))));

        let teapot = StatusCode::from_u16(418).unwrap();
        let result = text_from_response(teapot, r#"{"fact":"valid"}"#, "/fact");
        assert!(matches!(result, Err(FetchError::Status(418))));
    }

    #[test]
    fn missing_field_is_malformed_even_on_success() {
        let result = text_from_response(StatusCode::OK, r#"{"length":30}"#, "/fact");
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn wrong_typed_field_is_malformed() {
        let result = text_from_response(StatusCode::OK, r#"{"fact":42}"#, "/fact");
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let result = text_from_response(StatusCode::OK, "not json at all", "/fact");
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn relative_image_path_is_rewritten_against_the_origin() {
        let body = r#"{"url":"/cat/abc123"}"#;
        let url =
            image_url_from_response(StatusCode::OK, body, "/url", "https://cataas.com").unwrap();
        assert_eq!(url, "https://cataas.com/cat/abc123");
    }

    #[test]
    fn absolute_image_url_passes_through() {
        let url = absolutize("https://cataas.com", "https://cdn2.thecatapi.com/images/abc.jpg")
            .unwrap();
        assert_eq!(url, "https://cdn2.thecatapi.com/images/abc.jpg");
    }

    #[test]
    fn empty_image_url_is_malformed() {
        let result =
            image_url_from_response(StatusCode::OK, r#"{"url":""}"#, "/url", "https://cataas.com");
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn unparseable_image_url_is_malformed() {
        let result = absolutize("https://cataas.com", "http://[");
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn verify_image_accepts_decodable_bytes() {
        let mut png = Vec::new();
        let pixels = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 128, 0, 255]));
        image::DynamicImage::ImageRgba8(pixels)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let fetched = verify_image("https://cataas.com/cat/abc123", &png).unwrap();
        assert_eq!(fetched.url, "https://cataas.com/cat/abc123");
        assert_eq!((fetched.width, fetched.height), (2, 2));
        assert_eq!(fetched.rgba.len(), 2 * 2 * 4);
    }

    #[test]
    fn verify_image_rejects_garbage_bytes() {
        let result = verify_image("https://cataas.com/cat/abc123", b"definitely not an image");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }
}
