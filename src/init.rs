//! Initialization that needs to be done on startup

/// Registers decoders that live outside the `image` crate.
/// Must run before the first file is decoded.
pub fn init() {
    #[cfg(feature = "jxl")]
    jxl_oxide::integration::register_image_decoding_hook();
    log::debug!("decoders initialized");
}
