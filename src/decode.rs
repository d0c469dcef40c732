use std::path::Path;

use image::{ImageReader, ImageResult};

use crate::image::Image;

/// Guesses the format based on file contents, falling back to the extension.
/// The file handle is closed before this returns.
pub fn decode(file: &Path) -> ImageResult<Image> {
    let reader = ImageReader::open(file)?.with_guessed_format()?;
    let format = reader.format();
    log::debug!("decoding {} as {:?}", file.display(), format);
    let pixels = reader.decode()?;
    Ok(Image { format, pixels })
}
