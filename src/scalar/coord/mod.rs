mod coordinate;
pub mod iterator;
mod view;

pub use coordinate::Coordinate;
pub use iterator::CoordinateIterator;
pub use view::CoordinateView;
