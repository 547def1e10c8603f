use std::cell::OnceCell;
use std::fmt;
use std::marker::PhantomData;

use crate::datatypes::GeometryType;
use crate::engine::{Context, Handle};
use crate::error::Result;
use crate::scalar::child::Children;
use crate::scalar::handle::expect_live;
use crate::scalar::{ChildGeometryView, Geometry, HandleLifetime, LineString, Point, Polygon};
use crate::trait_::{check_type, CollectionElement, FromHandle, GeometryScalarTrait};

/// An ordered collection of child geometries of element type `E`.
///
/// The element type fixes the runtime type tag the collection accepts: a collection of
/// [`Geometry`] is a heterogeneous geometry collection, a collection of [`Point`] is a multi
/// point, and so on. The number of members is read on first use and cached.
pub struct GeometryCollection<'a, E> {
    lifetime: HandleLifetime<'a>,
    num_geometries: OnceCell<usize>,
    _element: PhantomData<fn() -> E>,
}

/// A collection of points.
pub type MultiPoint<'a> = GeometryCollection<'a, Point<'a>>;

/// A collection of line strings.
pub type MultiLineString<'a> = GeometryCollection<'a, LineString<'a>>;

/// A collection of polygons.
pub type MultiPolygon<'a> = GeometryCollection<'a, Polygon<'a>>;

impl<'a, E: CollectionElement<'a>> GeometryCollection<'a, E> {
    pub const GEOMETRY_TYPE: GeometryType = E::COLLECTION_TYPE;

    pub(crate) fn new_unchecked(lifetime: HandleLifetime<'a>) -> Self {
        Self {
            lifetime,
            num_geometries: OnceCell::new(),
            _element: PhantomData,
        }
    }

    /// The members of this collection, borrowed from it.
    pub fn geometries(&self) -> ChildGeometryView<'_, E::Borrowed<'_>> {
        ChildGeometryView::with_len(
            self.lifetime.handle(),
            Children::Geometries,
            self.num_geometries(),
        )
    }

    pub fn num_geometries(&self) -> usize {
        *self.num_geometries.get_or_init(|| {
            expect_live(Context::global().num_geometries(self.lifetime.handle()))
        })
    }

    pub fn geometry(&self, i: usize) -> Option<E::Borrowed<'_>> {
        self.geometries().get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.num_geometries() == 0
    }
}

impl<'a, E: CollectionElement<'a>> FromHandle<'a> for GeometryCollection<'a, E> {
    fn from_typed_handle(lifetime: HandleLifetime<'a>, geometry_type: GeometryType) -> Result<Self> {
        check_type(geometry_type, E::COLLECTION_TYPE)?;
        Ok(Self::new_unchecked(lifetime))
    }
}

macro_rules! impl_collection_scalar {
    ($element:ident, $geo:ty, $variant:ident) => {
        impl<'a> GeometryScalarTrait for GeometryCollection<'a, $element<'a>> {
            type ScalarGeo = $geo;

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
                geo::Geometry::$variant(self.to_geo())
            }
        }
    };
}

impl_collection_scalar!(Point, geo::MultiPoint, MultiPoint);
impl_collection_scalar!(LineString, geo::MultiLineString, MultiLineString);
impl_collection_scalar!(Polygon, geo::MultiPolygon, MultiPolygon);
impl_collection_scalar!(Geometry, geo::GeometryCollection, GeometryCollection);

impl<E> fmt::Debug for GeometryCollection<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryCollection")
            .field("lifetime", &self.lifetime)
            .field("num_geometries", &self.num_geometries)
            .finish()
    }
}
