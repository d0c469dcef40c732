use image::{DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// Format the image was decoded from, if it could be determined
    pub format: Option<ImageFormat>,
    pub pixels: DynamicImage,
}
