use std::cell::OnceCell;

use crate::datatypes::GeometryType;
use crate::engine::{Context, Handle};
use crate::error::Result;
use crate::scalar::child::Children;
use crate::scalar::handle::expect_live;
use crate::scalar::{ChildGeometryView, HandleLifetime, LinearRing};
use crate::trait_::{check_type, CollectionElement, FromHandle, GeometryScalarTrait};

/// A polygon geometry: one exterior ring and any number of interior rings.
///
/// The exterior ring handle and the number of interior rings are read on first use and cached.
#[derive(Debug)]
pub struct Polygon<'a> {
    lifetime: HandleLifetime<'a>,
    exterior: OnceCell<Handle>,
    num_interiors: OnceCell<usize>,
}

impl<'a> Polygon<'a> {
    pub const GEOMETRY_TYPE: GeometryType = GeometryType::Polygon;

    pub(crate) fn new_unchecked(lifetime: HandleLifetime<'a>) -> Self {
        Self {
            lifetime,
            exterior: OnceCell::new(),
            num_interiors: OnceCell::new(),
        }
    }

    /// The exterior ring, borrowed from this polygon.
    pub fn exterior_ring(&self) -> LinearRing<'_> {
        let handle = *self.exterior.get_or_init(|| {
            expect_live(Context::global().exterior_ring(self.lifetime.handle()))
        });
        LinearRing::new_unchecked(HandleLifetime::borrowed(handle))
    }

    /// The interior rings (holes), borrowed from this polygon.
    pub fn interior_rings(&self) -> ChildGeometryView<'_, LinearRing<'_>> {
        ChildGeometryView::with_len(
            self.lifetime.handle(),
            Children::InteriorRings,
            self.num_interiors(),
        )
    }

    pub fn num_interiors(&self) -> usize {
        *self.num_interiors.get_or_init(|| {
            expect_live(Context::global().num_interior_rings(self.lifetime.handle()))
        })
    }

    pub fn interior(&self, i: usize) -> Option<LinearRing<'_>> {
        self.interior_rings().get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.exterior_ring().is_empty()
    }
}

impl<'a> FromHandle<'a> for Polygon<'a> {
    fn from_typed_handle(lifetime: HandleLifetime<'a>, geometry_type: GeometryType) -> Result<Self> {
        check_type(geometry_type, Self::GEOMETRY_TYPE)?;
        Ok(Self::new_unchecked(lifetime))
    }
}

impl<'a> CollectionElement<'a> for Polygon<'a> {
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiPolygon;
    type Borrowed<'b> = Polygon<'b>;
}

impl GeometryScalarTrait for Polygon<'_> {
    type ScalarGeo = geo::Polygon;

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
        geo::Geometry::Polygon(self.to_geo())
    }
}
