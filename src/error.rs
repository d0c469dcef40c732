use std::fmt::{Debug, Display};
pub struct OverlayError(pub String);

impl Display for OverlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for OverlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("OverlayError").field(&self.0).finish()
    }
}

impl std::error::Error for OverlayError {}

#[macro_export]
macro_rules! ov_err {
    ($($msg:tt)+) => {
        $crate::error::OverlayError(format!(
            "mkvidoverlay: {} @ {}:{}:{}",
            format_args!($($msg)+),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! ov_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::ov_err!("{}", err));
            }
        }
    };
}
