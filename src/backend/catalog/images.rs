//! Movie Image URLs

use crate::shared::catalog::PLACEHOLDER_IMAGE_URL;

/// Turns stored image paths into public CDN URLs
#[derive(Debug, Clone, Default)]
pub struct ImageResolver {
    cloud_name: Option<String>,
}

impl ImageResolver {
    pub fn new(cloud_name: Option<String>) -> Self {
        Self { cloud_name }
    }

    /// Public URL for a stored image path
    ///
    /// Falls back to the placeholder when the movie has no image or no CDN
    /// account is configured.
    pub fn resolve(&self, path: Option<&str>) -> String {
        match (self.cloud_name.as_deref(), path.map(str::trim)) {
            (Some(cloud), Some(path)) if !path.is_empty() => format!(
                "https://res.cloudinary.com/{}/image/upload/{}",
                cloud,
                path.trim_start_matches('/')
            ),
            _ => PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}
