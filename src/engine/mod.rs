//! The native geometry engine.
//!
//! Geometries live in an arena owned by a process-wide [`Context`] and are only reachable through
//! opaque [`Handle`]s. A handle returned by a reader is a root: the caller owns it and must release
//! it with [`Context::destroy`] exactly once. Handles obtained by querying a root for one of its
//! components (rings, members) belong to the root and are released together with it.
//!
//! Every entry point serializes on the context's lock, so a [`Context`] may be shared between
//! threads.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, trace};

use crate::engine::arena::{Arena, PendingNode};
use crate::error::Result;

pub(crate) mod arena;
mod builder;
mod options;
mod reader;

pub use options::ReadOptions;
pub use reader::{WkbReader, WktReader};

/// Opaque reference to a native geometry.
///
/// Handles are never null and never reused within a process, so a stale handle is always
/// detected by the engine instead of aliasing a newer geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) NonZeroU64);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

static GLOBAL: OnceLock<Context> = OnceLock::new();

/// Engine context token.
#[derive(Debug)]
pub struct Context {
    arena: Mutex<Arena>,
    pub(crate) live_readers: AtomicUsize,
}

impl Context {
    pub(crate) fn new() -> Self {
        Self {
            arena: Mutex::new(Arena::new()),
            live_readers: AtomicUsize::new(0),
        }
    }

    /// The process-wide context, created on first use.
    pub fn global() -> &'static Context {
        GLOBAL.get_or_init(|| {
            debug!("initializing geometry engine context");
            Context::new()
        })
    }

    fn arena(&self) -> MutexGuard<'_, Arena> {
        self.arena.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn store(&self, tree: PendingNode) -> Handle {
        self.arena().insert(tree)
    }

    /// Release a root geometry and all of its components.
    ///
    /// Fails, without side effects, for a component handle or a handle that was already released.
    pub fn destroy(&self, handle: Handle) -> Result<()> {
        let released = self.arena().destroy(handle)?;
        trace!(%handle, released, "destroyed native geometry");
        Ok(())
    }

    /// Whether `handle` refers to a live geometry.
    pub fn contains(&self, handle: Handle) -> bool {
        self.arena().contains(handle)
    }

    /// Number of readers currently alive.
    pub fn live_readers(&self) -> usize {
        self.live_readers.load(Ordering::SeqCst)
    }

    /// Number of native geometries, roots and components, currently stored.
    pub fn num_geometries_stored(&self) -> usize {
        self.arena().len()
    }

    /// The runtime type tag of a geometry.
    pub fn geometry_type_id(&self, handle: Handle) -> Result<i32> {
        Ok(self.arena().node(handle)?.kind.type_id())
    }

    /// Size of the coordinate sequence of a point, line string or ring.
    pub fn coord_seq_size(&self, handle: Handle) -> Result<usize> {
        Ok(self.arena().coords(handle)?.len())
    }

    pub fn coord_x(&self, handle: Handle, index: usize) -> Result<f64> {
        Ok(self.arena().coord(handle, index)?.x)
    }

    pub fn coord_y(&self, handle: Handle, index: usize) -> Result<f64> {
        Ok(self.arena().coord(handle, index)?.y)
    }

    /// Number of sub-geometries. Non-collections count as a single geometry.
    pub fn num_geometries(&self, handle: Handle) -> Result<usize> {
        self.arena().num_geometries(handle)
    }

    /// The `n`th sub-geometry. For a non-collection, `n = 0` is the geometry itself.
    pub fn geometry_n(&self, handle: Handle, n: usize) -> Result<Handle> {
        self.arena().geometry_n(handle, n)
    }

    pub fn exterior_ring(&self, handle: Handle) -> Result<Handle> {
        self.arena().exterior_ring(handle)
    }

    pub fn num_interior_rings(&self, handle: Handle) -> Result<usize> {
        self.arena().num_interior_rings(handle)
    }

    pub fn interior_ring_n(&self, handle: Handle, n: usize) -> Result<Handle> {
        self.arena().interior_ring_n(handle, n)
    }
}
