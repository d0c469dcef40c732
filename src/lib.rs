//! `mkvidoverlay` inverts images and composites them over a semi-transparent
//! solid background, e.g. to prepare overlays for video editing.
//! This interface is unstable and subject to change at any time.
//! Please use this documentation only if you are developing `mkvidoverlay`.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
mod decode;
mod encode;
pub mod error;
pub mod help;
mod image;
mod init;
mod operations;
pub mod plan;
mod utils;
