pub mod image_cache;

pub use image_cache::{ImageCacheProvider, use_image_cache};
