use std::collections::HashMap;
use std::num::NonZeroU64;

use geo::Coord;

use crate::engine::Handle;
use crate::error::{GeoHandleError, Result};

/// Shape of a stored native geometry.
///
/// The discriminant is the runtime type tag reported through
/// [`Context::geometry_type_id`](crate::engine::Context::geometry_type_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub(crate) enum NodeKind {
    Point = 0,
    LineString = 1,
    LinearRing = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
    CircularString = 8,
    CompoundCurve = 9,
    CurvePolygon = 10,
    MultiCurve = 11,
    MultiSurface = 12,
}

impl NodeKind {
    pub(crate) fn type_id(self) -> i32 {
        self as i32
    }

    /// Whether the node stores its own coordinate sequence.
    pub(crate) fn has_coords(self) -> bool {
        matches!(
            self,
            NodeKind::Point | NodeKind::LineString | NodeKind::LinearRing | NodeKind::CircularString
        )
    }

    /// Whether the node's children are its sub-geometries.
    pub(crate) fn is_collection(self) -> bool {
        matches!(
            self,
            NodeKind::MultiPoint
                | NodeKind::MultiLineString
                | NodeKind::MultiPolygon
                | NodeKind::GeometryCollection
                | NodeKind::CompoundCurve
                | NodeKind::MultiCurve
                | NodeKind::MultiSurface
        )
    }

    /// Whether the node's children are rings, exterior first.
    pub(crate) fn has_rings(self) -> bool {
        matches!(self, NodeKind::Polygon | NodeKind::CurvePolygon)
    }
}

/// A geometry tree produced by a reader, not yet stored in the arena.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PendingNode {
    pub(crate) kind: NodeKind,
    pub(crate) coords: Vec<Coord>,
    pub(crate) children: Vec<PendingNode>,
}

impl PendingNode {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            coords: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn with_coords(kind: NodeKind, coords: Vec<Coord>) -> Self {
        Self {
            kind,
            coords,
            children: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) coords: Vec<Coord>,
    pub(crate) children: Vec<Handle>,
    /// `None` for the root of a parsed tree; only roots may be destroyed.
    pub(crate) parent: Option<Handle>,
}

/// Storage for every live native geometry of a context.
#[derive(Debug)]
pub(crate) struct Arena {
    nodes: HashMap<Handle, Node>,
    next_id: NonZeroU64,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: NonZeroU64::MIN,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.nodes.contains_key(&handle)
    }

    fn allocate(&mut self) -> Handle {
        let handle = Handle(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .unwrap_or_else(|| panic!("geometry handle space exhausted"));
        handle
    }

    /// Store a parsed tree, returning the handle of its root.
    pub(crate) fn insert(&mut self, pending: PendingNode) -> Handle {
        self.insert_node(pending, None)
    }

    fn insert_node(&mut self, pending: PendingNode, parent: Option<Handle>) -> Handle {
        let handle = self.allocate();
        let children = pending
            .children
            .into_iter()
            .map(|child| self.insert_node(child, Some(handle)))
            .collect();
        self.nodes.insert(
            handle,
            Node {
                kind: pending.kind,
                coords: pending.coords,
                children,
                parent,
            },
        );
        handle
    }

    pub(crate) fn node(&self, handle: Handle) -> Result<&Node> {
        self.nodes
            .get(&handle)
            .ok_or_else(|| GeoHandleError::Engine(format!("unknown geometry handle {handle}")))
    }

    /// Release a root geometry and every component it owns.
    pub(crate) fn destroy(&mut self, handle: Handle) -> Result<usize> {
        let node = self.node(handle)?;
        if let Some(parent) = node.parent {
            return Err(GeoHandleError::Engine(format!(
                "geometry handle {handle} is a component of {parent} and cannot be destroyed"
            )));
        }

        let mut released = 0;
        let mut pending = vec![handle];
        while let Some(handle) = pending.pop() {
            if let Some(node) = self.nodes.remove(&handle) {
                pending.extend(node.children);
                released += 1;
            }
        }
        Ok(released)
    }

    pub(crate) fn coords(&self, handle: Handle) -> Result<&[Coord]> {
        let node = self.node(handle)?;
        if node.kind.has_coords() {
            Ok(&node.coords)
        } else {
            Err(GeoHandleError::Engine(format!(
                "geometry handle {handle} has no coordinate sequence"
            )))
        }
    }

    pub(crate) fn coord(&self, handle: Handle, index: usize) -> Result<Coord> {
        let coords = self.coords(handle)?;
        coords.get(index).copied().ok_or_else(|| {
            GeoHandleError::Engine(format!(
                "coordinate index {index} out of range for sequence of size {}",
                coords.len()
            ))
        })
    }

    pub(crate) fn num_geometries(&self, handle: Handle) -> Result<usize> {
        let node = self.node(handle)?;
        if node.kind.is_collection() {
            Ok(node.children.len())
        } else {
            Ok(1)
        }
    }

    pub(crate) fn geometry_n(&self, handle: Handle, n: usize) -> Result<Handle> {
        let node = self.node(handle)?;
        let found = if node.kind.is_collection() {
            node.children.get(n).copied()
        } else {
            (n == 0).then_some(handle)
        };
        found.ok_or_else(|| {
            GeoHandleError::Engine(format!(
                "sub-geometry index {n} out of range for geometry handle {handle}"
            ))
        })
    }

    fn rings(&self, handle: Handle) -> Result<&[Handle]> {
        let node = self.node(handle)?;
        if node.kind.has_rings() {
            Ok(&node.children)
        } else {
            Err(GeoHandleError::Engine(format!(
                "geometry handle {handle} is not a polygon"
            )))
        }
    }

    pub(crate) fn exterior_ring(&self, handle: Handle) -> Result<Handle> {
        self.rings(handle)?.first().copied().ok_or_else(|| {
            GeoHandleError::Engine(format!("polygon handle {handle} has no exterior ring"))
        })
    }

    pub(crate) fn num_interior_rings(&self, handle: Handle) -> Result<usize> {
        Ok(self.rings(handle)?.len().saturating_sub(1))
    }

    pub(crate) fn interior_ring_n(&self, handle: Handle, n: usize) -> Result<Handle> {
        self.rings(handle)?.get(n + 1).copied().ok_or_else(|| {
            GeoHandleError::Engine(format!(
                "interior ring index {n} out of range for polygon handle {handle}"
            ))
        })
    }
}
