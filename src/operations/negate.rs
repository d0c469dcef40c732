use image::{DynamicImage, ImageBuffer, Pixel, Primitive};

use crate::{error::OverlayError, image::Image, ov_err};

/// Replaces every color sample with its complement, `MAX - sample`.
/// The alpha channel, if there is one, is left as it was.
pub fn negate(image: &mut Image) -> Result<(), OverlayError> {
    use DynamicImage::*;
    match &mut image.pixels {
        ImageLuma8(pixels) => invert_color_channels(pixels),
        ImageLumaA8(pixels) => invert_color_channels(pixels),
        ImageRgb8(pixels) => invert_color_channels(pixels),
        ImageRgba8(pixels) => invert_color_channels(pixels),
        ImageLuma16(pixels) => invert_color_channels(pixels),
        ImageLumaA16(pixels) => invert_color_channels(pixels),
        ImageRgb16(pixels) => invert_color_channels(pixels),
        ImageRgba16(pixels) => invert_color_channels(pixels),
        ImageRgb32F(pixels) => invert_color_channels(pixels),
        ImageRgba32F(pixels) => invert_color_channels(pixels),
        other => {
            return Err(ov_err!(
                "unsupported pixel format {:?} for operation negate",
                other.color()
            ))
        }
    }
    Ok(())
}

fn invert_color_channels<P, S>(pixels: &mut ImageBuffer<P, Vec<S>>)
where
    P: Pixel<Subpixel = S>,
    S: Primitive,
{
    // The alpha channel is always the last one for all DynamicImage variants
    let color_channels = usize::from(P::CHANNEL_COUNT) - usize::from(P::HAS_ALPHA);
    for pixel in pixels.pixels_mut() {
        for sample in &mut pixel.channels_mut()[..color_channels] {
            *sample = S::DEFAULT_MAX_VALUE - *sample;
        }
    }
}
