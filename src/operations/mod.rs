mod composite;
mod negate;
mod show;

pub use show::show;

use crate::{arg_parsers::ColorSpec, error::OverlayError, image::Image};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    Negate,
    /// Composite the image over a solid `color` background with the given opacity
    Underlay { color: ColorSpec, alpha: u8 },
}

impl Operation {
    pub fn execute(&self, image: &mut Image) -> Result<(), OverlayError> {
        log::debug!("applying {:?}", self);
        match self {
            Operation::Negate => negate::negate(image),
            Operation::Underlay { color, alpha } => composite::underlay(image, *color, *alpha),
        }
    }
}
