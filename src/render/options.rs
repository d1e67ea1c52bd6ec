//! Conversion options and the image loading strategy.

use crate::error::Result;
use base64::Engine;
use std::fmt;
use std::sync::Arc;

/// An image filter directive found on an `a:blip`.
///
/// Filters are handed to the [`ImageLoader`]; the library itself never
/// touches pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageFilter {
    /// `a:grayscl`
    Grayscale,
    /// `a:biLevel`: luminance threshold in [0, 1]
    BiLevel { threshold: f64 },
    /// `a:alphaModFix`: opacity amount in [0, 1]
    AlphaModFix { amount: f64 },
    /// `a:duotone`: the two resolved colors
    Duotone { dark: String, light: String },
}

/// An embedded image about to be turned into an `src` value.
#[derive(Debug, Clone, Copy)]
pub struct ImageSource<'a> {
    /// Package path of the image part
    pub name: &'a str,
    /// MIME type guessed from the extension
    pub mime_type: &'a str,
    /// Raw image bytes
    pub data: &'a [u8],
    /// Filters declared on the blip, in document order
    pub filters: &'a [ImageFilter],
}

/// Turns embedded images into `src` values (data URIs, uploaded URLs, ...).
pub trait ImageLoader: Send + Sync {
    /// Produce the `src` attribute value for an image.
    fn load(&self, image: &ImageSource<'_>) -> Result<String>;
}

impl<F> ImageLoader for F
where
    F: Fn(&ImageSource<'_>) -> Result<String> + Send + Sync,
{
    fn load(&self, image: &ImageSource<'_>) -> Result<String> {
        self(image)
    }
}

/// Default loader: embeds the bytes as a base64 data URI. Filters are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriLoader;

impl ImageLoader for DataUriLoader {
    fn load(&self, image: &ImageSource<'_>) -> Result<String> {
        Ok(format!(
            "data:{};base64,{}",
            image.mime_type,
            base64::engine::general_purpose::STANDARD.encode(image.data)
        ))
    }
}

/// Options for converting presentations.
#[derive(Clone, Default)]
pub struct ConvertOptions {
    /// Custom image loader (None = embed data URIs)
    pub image_loader: Option<Arc<dyn ImageLoader>>,
}

impl fmt::Debug for ConvertOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("image_loader", &self.image_loader.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom image loader.
    pub fn with_image_loader(mut self, loader: impl ImageLoader + 'static) -> Self {
        self.image_loader = Some(Arc::new(loader));
        self
    }

    /// The loader in effect.
    pub fn image_loader(&self) -> &dyn ImageLoader {
        match &self.image_loader {
            Some(loader) => loader.as_ref(),
            None => &DataUriLoader,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png<'a>(filters: &'a [ImageFilter]) -> ImageSource<'a> {
        ImageSource {
            name: "ppt/media/image1.png",
            mime_type: "image/png",
            data: b"abc",
            filters,
        }
    }

    #[test]
    fn test_default_options_embed_data_uri() {
        let opts = ConvertOptions::default();
        assert!(opts.image_loader.is_none());
        let src = opts.image_loader().load(&png(&[])).unwrap();
        assert_eq!(src, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_builder_with_closure_loader() {
        let opts = ConvertOptions::new().with_image_loader(|image: &ImageSource<'_>| -> crate::Result<String> {
            Ok(format!("https://cdn.example.com/{}?f={}", image.name, image.filters.len()))
        });
        let filters = [ImageFilter::Grayscale];
        let src = opts.image_loader().load(&png(&filters)).unwrap();
        assert_eq!(src, "https://cdn.example.com/ppt/media/image1.png?f=1");
        assert!(format!("{:?}", opts).contains("custom"));
    }
}
