use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use crate::{arg_parsers::ColorSpec, error::OverlayError, image::Image, ov_err};

/// Places the image on top of a solid background of the same size.
/// The result is always RGBA with 8 bits per channel.
pub fn underlay(image: &mut Image, color: ColorSpec, alpha: u8) -> Result<(), OverlayError> {
    let (width, height) = image.pixels.dimensions();
    let mut canvas = background(width, height, color, alpha);
    // images without an alpha channel become fully opaque here
    let foreground = image.pixels.to_rgba8();
    composite_over(&mut canvas, &foreground)?;
    image.pixels = DynamicImage::ImageRgba8(canvas);
    Ok(())
}

/// A canvas filled with `color`, with the same `alpha` on every pixel.
pub fn background(width: u32, height: u32, color: ColorSpec, alpha: u8) -> RgbaImage {
    let [r, g, b] = color.to_rgb();
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, alpha]))
}

/// Alpha-composites `foreground` over `background` in place.
pub fn composite_over(
    background: &mut RgbaImage,
    foreground: &RgbaImage,
) -> Result<(), OverlayError> {
    if background.dimensions() != foreground.dimensions() {
        return Err(ov_err!(
            "cannot composite a {:?} image over a {:?} background",
            foreground.dimensions(),
            background.dimensions()
        ));
    }
    for (bg, fg) in background.pixels_mut().zip(foreground.pixels()) {
        *bg = over(*fg, *bg);
    }
    Ok(())
}

/// Porter-Duff "over": the foreground's own alpha is the blend weight.
fn over(fg: Rgba<u8>, bg: Rgba<u8>) -> Rgba<u8> {
    let fg_alpha = f32::from(fg[3]) / 255.0;
    let bg_alpha = f32::from(bg[3]) / 255.0;
    // how much of the background shows through the foreground
    let bg_weight = bg_alpha * (1.0 - fg_alpha);
    let out_alpha = fg_alpha + bg_weight;
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let blended = (f32::from(fg[c]) * fg_alpha + f32::from(bg[c]) * bg_weight) / out_alpha;
        out[c] = to_u8(blended);
    }
    out[3] = to_u8(out_alpha * 255.0);
    Rgba(out)
}

fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
