use std::io::{BufWriter, Write};

use image::ImageFormat;

use crate::{error::OverlayError, image::Image, ov_try};

/// Opens the image in the default viewer of the platform.
///
/// The viewer runs detached, so the temporary PNG it reads stays on disk after we exit.
pub fn show(image: &Image) -> Result<(), OverlayError> {
    let file = ov_try!(tempfile::Builder::new()
        .prefix("mkvidoverlay-")
        .suffix(".png")
        .tempfile());
    {
        let mut writer = BufWriter::new(file.as_file());
        ov_try!(image.pixels.write_to(&mut writer, ImageFormat::Png));
        ov_try!(writer.flush());
    }
    let (_file, path) = ov_try!(file.keep());
    log::debug!("showing {}", path.display());
    ov_try!(open::that_detached(&path));
    Ok(())
}
