// src/infrastructure/media.rs
//! Remote advert picture checks: extension, reachability, body size, format and dimensions.
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::media::ImageValidator,
};
use async_trait::async_trait;
use image::io::Reader as ImageReader;
use reqwest::{Client, Response, Url};
use std::{io::Cursor, time::Duration};
use tracing::{debug, error};

pub const ALLOWED_EXTENSIONS: [&str; 4] = [".jpeg", ".jpg", ".png", ".gif"];

/// Inclusive pixel bounds for an advert picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLimits {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            min_width: 140,
            max_width: 1080,
            min_height: 60,
            max_height: 720,
        }
    }
}

impl ImageLimits {
    pub fn check(&self, width: u32, height: u32) -> ApplicationResult<()> {
        if width > self.max_width || height > self.max_height {
            return Err(ApplicationError::validation("image is too big"));
        }
        if width < self.min_width || height < self.min_height {
            return Err(ApplicationError::validation("image is too small"));
        }
        Ok(())
    }
}

/// Extension of the last path segment, dot included, lowercased.
/// Query strings and fragments are not part of the path.
pub fn image_extension(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();
    match segment.rfind('.') {
        Some(idx) => segment[idx..].to_ascii_lowercase(),
        None => String::new(),
    }
}

const MSG_INVALID_URL: &str = "invalid image url";
const MSG_FILE_TOO_LARGE: &str = "image file is too large";

#[derive(Clone)]
pub struct HttpImageValidator {
    client: Client,
    limits: ImageLimits,
    max_bytes: usize,
}

impl HttpImageValidator {
    pub fn new(timeout: Duration, max_bytes: usize) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApplicationError::infrastructure(format!("http client: {err}")))?;
        Ok(Self {
            client,
            limits: ImageLimits::default(),
            max_bytes,
        })
    }

    async fn fetch(&self, url: Url) -> ApplicationResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| {
                debug!(error = %err, "image fetch failed");
                ApplicationError::validation(MSG_INVALID_URL)
            })?;

        read_capped(response, self.max_bytes).await
    }
}

/// Reads the body chunk by chunk, giving up as soon as it grows past `max_bytes`.
async fn read_capped(mut response: Response, max_bytes: usize) -> ApplicationResult<Vec<u8>> {
    let declared = response.content_length().unwrap_or(0);
    if usize::try_from(declared).map_or(true, |len| len > max_bytes) {
        debug!(declared, max_bytes, "image body declared too large");
        return Err(ApplicationError::validation(MSG_FILE_TOO_LARGE));
    }

    let mut data = Vec::with_capacity(usize::try_from(declared).unwrap_or(0));
    while let Some(chunk) = response.chunk().await.map_err(|err| {
        debug!(error = %err, "image body read failed");
        ApplicationError::validation(MSG_INVALID_URL)
    })? {
        append_capped(&mut data, &chunk, max_bytes)?;
    }
    Ok(data)
}

fn append_capped(data: &mut Vec<u8>, chunk: &[u8], max_bytes: usize) -> ApplicationResult<()> {
    if data.len() + chunk.len() > max_bytes {
        debug!(max_bytes, "image body exceeded cap");
        return Err(ApplicationError::validation(MSG_FILE_TOO_LARGE));
    }
    data.extend_from_slice(chunk);
    Ok(())
}

/// Reads width and height from the image header without decoding pixels.
fn read_dimensions(data: &[u8]) -> ApplicationResult<(u32, u32)> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|_| ApplicationError::validation(MSG_INVALID_URL))?
        .into_dimensions()
        .map_err(|_| ApplicationError::validation(MSG_INVALID_URL))
}

#[async_trait]
impl ImageValidator for HttpImageValidator {
    async fn validate(&self, url: &str) -> ApplicationResult<()> {
        let parsed =
            Url::parse(url).map_err(|_| ApplicationError::validation(MSG_INVALID_URL))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApplicationError::validation(MSG_INVALID_URL));
        }

        let data = self.fetch(parsed.clone()).await?;

        let ext = image_extension(&parsed);
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ApplicationError::validation(format!(
                "wrong image extension: {ext}"
            )));
        }

        let (width, height) = tokio::task::spawn_blocking(move || read_dimensions(&data))
            .await
            .map_err(|err| {
                error!(error = %err, "image header task failed");
                ApplicationError::infrastructure("internal error")
            })??;
        debug!(width, height, "read advert image dimensions");

        self.limits.check(width, height)
    }
}
