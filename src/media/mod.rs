// SPDX-License-Identifier: MPL-2.0
//! Image lists and the filters applied to them.

pub mod filter;
pub mod image_list;

pub use filter::{is_mask_image, MaskFilter};
pub use image_list::ImageList;
