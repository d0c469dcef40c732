use std::{
    borrow::Cow,
    ffi::OsStr,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{DynamicImage, ImageFormat};

use crate::{error::OverlayError, image::Image, ov_err, ov_try};

pub fn encode(image: &Image, path: &Path) -> Result<(), OverlayError> {
    let format = choose_encoding_format(image, path)?;
    let pixels = pixels_for_format(&image.pixels, format);
    log::debug!(
        "encoding {} as {:?} ({:?})",
        path.display(),
        format,
        pixels.color()
    );

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| ov_err!("unable to create '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);
    ov_try!(pixels.write_to(&mut writer, format));
    // Flush the buffers to write everything to disk.
    // Dropping the writer would flush too, but it would swallow the errors.
    ov_try!(writer.flush());

    Ok(())
}

fn choose_encoding_format(image: &Image, path: &Path) -> Result<ImageFormat, OverlayError> {
    // guess based on the output path first
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format);
    }
    // if that fails, use the input format
    if let Some(format) = image.format {
        return Ok(format);
    }
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(ov_err!(
        "no encoder for this image format `{}'",
        extension.to_ascii_uppercase().to_string_lossy()
    ))
}

/// Converts the composited pixels to a layout the encoder for `format` accepts.
/// Formats that cannot store transparency lose the alpha channel here.
fn pixels_for_format(pixels: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match format {
        ImageFormat::Jpeg if pixels.color().has_alpha() => {
            Cow::Owned(DynamicImage::ImageRgb8(pixels.to_rgb8()))
        }
        // the farbfeld encoder takes nothing but 16-bit RGBA
        ImageFormat::Farbfeld => Cow::Owned(DynamicImage::ImageRgba16(pixels.to_rgba16())),
        ImageFormat::Hdr => Cow::Owned(DynamicImage::ImageRgb32F(pixels.to_rgb32f())),
        ImageFormat::OpenExr => Cow::Owned(DynamicImage::ImageRgba32F(pixels.to_rgba32f())),
        _ => Cow::Borrowed(pixels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::ColorType;

    fn rgba_image(format: Option<ImageFormat>) -> Image {
        Image {
            format,
            pixels: DynamicImage::new_rgba8(2, 2),
        }
    }

    #[test]
    fn test_format_from_output_extension() {
        let image = rgba_image(Some(ImageFormat::Png));
        assert_eq!(
            choose_encoding_format(&image, Path::new("out.bmp")).unwrap(),
            ImageFormat::Bmp
        );
    }

    #[test]
    fn test_format_falls_back_to_input() {
        let image = rgba_image(Some(ImageFormat::Png));
        assert_eq!(
            choose_encoding_format(&image, Path::new("no-extension")).unwrap(),
            ImageFormat::Png
        );
        let image = rgba_image(None);
        assert!(choose_encoding_format(&image, Path::new("no-extension")).is_err());
    }

    #[test]
    fn test_jpeg_drops_alpha() {
        let image = rgba_image(None);
        let converted = pixels_for_format(&image.pixels, ImageFormat::Jpeg);
        assert_eq!(converted.color(), ColorType::Rgb8);
        let untouched = pixels_for_format(&image.pixels, ImageFormat::Png);
        assert_eq!(untouched.color(), ColorType::Rgba8);
    }

    #[test]
    fn test_farbfeld_gets_16_bit_rgba() {
        let image = rgba_image(None);
        let converted = pixels_for_format(&image.pixels, ImageFormat::Farbfeld);
        assert_eq!(converted.color(), ColorType::Rgba16);
    }

    #[test]
    fn test_encode_formats() {
        let dir = tempfile::tempdir().unwrap();
        let image = rgba_image(Some(ImageFormat::Png));
        for extension in ["png", "jpg", "ff", "bmp", "tiff", "qoi", "tga", "exr", "hdr"] {
            let path = dir.path().join(format!("out.{extension}"));
            encode(&image, &path).unwrap_or_else(|e| panic!("{extension}: {e}"));
            assert!(path.exists());
        }
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let error = encode(&rgba_image(None), &path).unwrap_err();
        assert!(error.0.contains("unable to create"));
    }
}
