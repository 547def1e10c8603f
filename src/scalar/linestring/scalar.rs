use std::cell::OnceCell;

use crate::datatypes::GeometryType;
use crate::engine::{Context, Handle};
use crate::error::Result;
use crate::scalar::handle::expect_live;
use crate::scalar::{Coordinate, CoordinateView, HandleLifetime};
use crate::trait_::{check_type, CollectionElement, FromHandle, GeometryScalarTrait};

/// A line string geometry.
///
/// The number of coordinates is read from the engine on first use and cached; the coordinates
/// themselves are read on every access.
#[derive(Debug)]
pub struct LineString<'a> {
    lifetime: HandleLifetime<'a>,
    num_coords: OnceCell<usize>,
}

impl<'a> LineString<'a> {
    pub const GEOMETRY_TYPE: GeometryType = GeometryType::LineString;

    /// Wrap a handle already known to hold a coordinate sequence.
    pub(crate) fn new_unchecked(lifetime: HandleLifetime<'a>) -> Self {
        Self {
            lifetime,
            num_coords: OnceCell::new(),
        }
    }

    pub(crate) fn lifetime(&self) -> &HandleLifetime<'a> {
        &self.lifetime
    }

    /// The coordinates of this line string.
    pub fn points(&self) -> CoordinateView<'_> {
        CoordinateView::with_len(self.lifetime.handle(), self.num_coords())
    }

    pub fn num_coords(&self) -> usize {
        *self.num_coords.get_or_init(|| {
            expect_live(Context::global().coord_seq_size(self.lifetime.handle()))
        })
    }

    pub fn coord(&self, i: usize) -> Option<Coordinate> {
        self.points().get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.num_coords() == 0
    }
}

impl<'a> FromHandle<'a> for LineString<'a> {
    fn from_typed_handle(lifetime: HandleLifetime<'a>, geometry_type: GeometryType) -> Result<Self> {
        check_type(geometry_type, Self::GEOMETRY_TYPE)?;
        Ok(Self::new_unchecked(lifetime))
    }
}

impl<'a> CollectionElement<'a> for LineString<'a> {
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiLineString;
    type Borrowed<'b> = LineString<'b>;
}

impl GeometryScalarTrait for LineString<'_> {
    type ScalarGeo = geo::LineString;

    fn handle(&self) -> Handle {
        self.lifetime.handle()
    }

    fn owns_handle(&self) -> bool {
        self.lifetime.owns()
    }

    fn geometry_type(&self) -> GeometryType {
        Self::GEOMETRY_TYPE
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        self.into()
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::LineString(self.to_geo())
    }
}
