pub mod grid;
pub mod io;
pub mod traits;

pub use self::grid::PixelGrid;
pub use self::traits::{Raster, RasterMut};
