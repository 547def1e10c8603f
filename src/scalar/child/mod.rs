pub mod iterator;
mod view;

pub use iterator::ChildGeometryIterator;
pub(crate) use view::Children;
pub use view::ChildGeometryView;
