//! Helpers for using `quickcheck`'s `Arbitrary` trait

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};
use quickcheck::{Arbitrary, Gen};

/// A small image with random contents in one of the integer pixel formats
#[derive(Debug, Clone)]
pub struct ArbitraryImage(pub DynamicImage);

impl Arbitrary for ArbitraryImage {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = small_dimension(g);
        let height = small_dimension(g);
        let format = *g.choose(&[0u8, 1, 2, 3, 4, 5]).unwrap_or(&0);
        let pixels = match format {
            0 => DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |_, _| {
                Luma([u8::arbitrary(g)])
            })),
            1 => DynamicImage::ImageLumaA8(ImageBuffer::from_fn(width, height, |_, _| {
                LumaA([u8::arbitrary(g), u8::arbitrary(g)])
            })),
            2 => DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |_, _| {
                Rgb([u8::arbitrary(g), u8::arbitrary(g), u8::arbitrary(g)])
            })),
            3 => DynamicImage::ImageRgb16(ImageBuffer::from_fn(width, height, |_, _| {
                Rgb([u16::arbitrary(g), u16::arbitrary(g), u16::arbitrary(g)])
            })),
            4 => DynamicImage::ImageRgba16(ImageBuffer::from_fn(width, height, |_, _| {
                Rgba([
                    u16::arbitrary(g),
                    u16::arbitrary(g),
                    u16::arbitrary(g),
                    u16::arbitrary(g),
                ])
            })),
            _ => DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |_, _| {
                Rgba([
                    u8::arbitrary(g),
                    u8::arbitrary(g),
                    u8::arbitrary(g),
                    u8::arbitrary(g),
                ])
            })),
        };
        Self(pixels)
    }
}

#[must_use]
fn small_dimension(g: &mut Gen) -> u32 {
    u32::from(u8::arbitrary(g) % 8) + 1
}
