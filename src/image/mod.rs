pub mod buffer;
pub mod pixel;
pub mod traits;

pub use self::buffer::Image;
pub use self::pixel::Pixel;
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
