use geo::Coord;
use geozero::error::{GeozeroError, Result};
use geozero::GeomProcessor;

use crate::engine::arena::{NodeKind, PendingNode};
use crate::engine::ReadOptions;

/// A streaming builder turning geozero's event stream into a native geometry tree.
///
/// Begin events open a node on a stack, end events close it and attach it to the enclosing node.
/// The kind of an untagged line string or polygon is decided by the node it is nested in.
#[derive(Debug)]
pub(crate) struct TreeBuilder {
    stack: Vec<PendingNode>,
    root: Option<PendingNode>,
    fix_structure: bool,
}

impl TreeBuilder {
    pub(crate) fn new(options: &ReadOptions) -> Self {
        Self {
            stack: Vec::new(),
            root: None,
            fix_structure: options.fix_structure(),
        }
    }

    /// Consume the builder, returning the finished tree.
    pub(crate) fn finish(self) -> Result<PendingNode> {
        if !self.stack.is_empty() {
            return Err(GeozeroError::Geometry(
                "geometry stream ended inside an open geometry".to_string(),
            ));
        }
        self.root
            .ok_or_else(|| GeozeroError::Geometry("geometry stream was empty".to_string()))
    }

    fn begin(&mut self, kind: NodeKind, size: usize) {
        let mut node = PendingNode::new(kind);
        // Sizes come straight from untrusted input.
        if kind.has_coords() {
            node.coords.reserve(size.min(1024));
        } else {
            node.children.reserve(size.min(1024));
        }
        self.stack.push(node);
    }

    fn end(&mut self, expected: &[NodeKind]) -> Result<()> {
        let node = match self.stack.pop() {
            Some(node) if expected.contains(&node.kind) => node,
            Some(node) => {
                return Err(GeozeroError::Geometry(format!(
                    "unbalanced geometry stream: closing {:?} while {:?} is open",
                    expected[0], node.kind
                )))
            }
            None => {
                return Err(GeozeroError::Geometry(format!(
                    "unbalanced geometry stream: closing {:?} with nothing open",
                    expected[0]
                )))
            }
        };
        let node = self.validate(node)?;
        self.attach(node)
    }

    fn attach(&mut self, node: PendingNode) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            // Members of a plain collection are limited to the linear kinds.
            if parent.kind == NodeKind::GeometryCollection && node.kind.type_id() > 7 {
                return Err(GeozeroError::Geometry(format!(
                    "{:?} is not allowed inside a geometry collection",
                    node.kind
                )));
            }
            parent.children.push(node);
            return Ok(());
        }
        if self.root.is_some() {
            return Err(GeozeroError::Geometry(
                "geometry stream contains more than one root geometry".to_string(),
            ));
        }
        self.root = Some(node);
        Ok(())
    }

    fn parent_kind(&self) -> Option<NodeKind> {
        self.stack.last().map(|node| node.kind)
    }

    fn validate(&self, mut node: PendingNode) -> Result<PendingNode> {
        match node.kind {
            NodeKind::LineString if node.coords.len() == 1 => Err(GeozeroError::Geometry(
                "line string must contain 0 or more than 1 coordinates".to_string(),
            )),
            NodeKind::LinearRing if !node.coords.is_empty() => {
                let first = node.coords[0];
                let closed = node.coords.last() == Some(&first);
                if !closed {
                    if !self.fix_structure {
                        return Err(GeozeroError::Geometry(
                            "points of linear ring do not form a closed line string".to_string(),
                        ));
                    }
                    node.coords.push(first);
                }
                if node.coords.len() < 4 {
                    return Err(GeozeroError::Geometry(format!(
                        "invalid number of points in linear ring: found {}, must be 0 or >= 4",
                        node.coords.len()
                    )));
                }
                Ok(node)
            }
            NodeKind::Polygon if node.children.is_empty() => {
                node.children.push(PendingNode::new(NodeKind::LinearRing));
                Ok(node)
            }
            NodeKind::Polygon if node.children.len() > 1 && node.children[0].coords.is_empty() => {
                Err(GeozeroError::Geometry(
                    "polygon with an empty shell cannot have holes".to_string(),
                ))
            }
            _ => Ok(node),
        }
    }

    fn unsupported(name: &str) -> Result<()> {
        Err(GeozeroError::Geometry(format!(
            "{name} geometries are not supported"
        )))
    }
}

#[allow(unused_variables)]
impl GeomProcessor for TreeBuilder {
    fn xy(&mut self, x: f64, y: f64, idx: usize) -> Result<()> {
        let coord = Coord { x, y };
        match self.stack.last_mut() {
            Some(node) if node.kind == NodeKind::MultiPoint => {
                let point = if x.is_nan() && y.is_nan() {
                    PendingNode::new(NodeKind::Point)
                } else {
                    PendingNode::with_coords(NodeKind::Point, vec![coord])
                };
                node.children.push(point);
                Ok(())
            }
            Some(node) if node.kind.has_coords() => {
                // Binary input encodes an empty point as NaN ordinates.
                if !(node.kind == NodeKind::Point && x.is_nan() && y.is_nan()) {
                    node.coords.push(coord);
                }
                Ok(())
            }
            Some(node) => Err(GeozeroError::Geometry(format!(
                "unexpected coordinate inside {:?}",
                node.kind
            ))),
            None => Err(GeozeroError::Geometry(
                "coordinate outside of any geometry".to_string(),
            )),
        }
    }

    fn empty_point(&mut self, idx: usize) -> Result<()> {
        self.attach(PendingNode::new(NodeKind::Point))
    }

    /// Only called for tagged points; the members of a multi point arrive as bare `xy` calls.
    fn point_begin(&mut self, idx: usize) -> Result<()> {
        self.begin(NodeKind::Point, 1);
        Ok(())
    }

    fn point_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::Point])
    }

    fn multipoint_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::MultiPoint, size);
        Ok(())
    }

    fn multipoint_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::MultiPoint])
    }

    fn linestring_begin(&mut self, tagged: bool, size: usize, idx: usize) -> Result<()> {
        let kind = match self.parent_kind() {
            Some(NodeKind::Polygon) | Some(NodeKind::CurvePolygon) if !tagged => {
                NodeKind::LinearRing
            }
            _ => NodeKind::LineString,
        };
        self.begin(kind, size);
        Ok(())
    }

    fn linestring_end(&mut self, tagged: bool, idx: usize) -> Result<()> {
        self.end(&[NodeKind::LineString, NodeKind::LinearRing])
    }

    fn multilinestring_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::MultiLineString, size);
        Ok(())
    }

    fn multilinestring_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::MultiLineString])
    }

    fn polygon_begin(&mut self, tagged: bool, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::Polygon, size);
        Ok(())
    }

    fn polygon_end(&mut self, tagged: bool, idx: usize) -> Result<()> {
        self.end(&[NodeKind::Polygon])
    }

    fn multipolygon_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::MultiPolygon, size);
        Ok(())
    }

    fn multipolygon_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::MultiPolygon])
    }

    fn geometrycollection_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::GeometryCollection, size);
        Ok(())
    }

    fn geometrycollection_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::GeometryCollection])
    }

    fn circularstring_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::CircularString, size);
        Ok(())
    }

    fn circularstring_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::CircularString])
    }

    fn compoundcurve_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::CompoundCurve, size);
        Ok(())
    }

    fn compoundcurve_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::CompoundCurve])
    }

    fn curvepolygon_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::CurvePolygon, size);
        Ok(())
    }

    fn curvepolygon_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::CurvePolygon])
    }

    fn multicurve_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::MultiCurve, size);
        Ok(())
    }

    fn multicurve_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::MultiCurve])
    }

    fn multisurface_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        self.begin(NodeKind::MultiSurface, size);
        Ok(())
    }

    fn multisurface_end(&mut self, idx: usize) -> Result<()> {
        self.end(&[NodeKind::MultiSurface])
    }

    fn triangle_begin(&mut self, tagged: bool, size: usize, idx: usize) -> Result<()> {
        Self::unsupported("triangle")
    }

    fn polyhedralsurface_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        Self::unsupported("polyhedral surface")
    }

    fn tin_begin(&mut self, size: usize, idx: usize) -> Result<()> {
        Self::unsupported("TIN")
    }
}
