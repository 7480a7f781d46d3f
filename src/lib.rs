//! Cubelab is the data model of an editor for worlds made of cubical blocks,
//! where the blocks are themselves made of smaller colored cells (voxels).
//!
//! This crate defines the map/voxel data structures and their derived values.
//! (Rendering, mesh generation, camera controls, and user interface belong to
//! other components and are deliberately absent here.)
//!
//! ## Data model
//!
//! * A [`Voxel`](voxel::Voxel) is a single colored cell with an opacity
//!   channel that doubles as a presence flag: zero alpha means the cell is
//!   empty.
//! * A [`Cube`](cube::Cube) is a dense rectangular volume of voxels together
//!   with identifying metadata; it is the reusable "block" unit. Its derived
//!   values — the deduplicated set of visible voxel types, and one boolean
//!   occupancy mask per type — are what a mesh generator consumes.
//! * A [`World`](world::World) is a sparse grid of block ids referencing a
//!   palette of `Cube`s, describing how blocks tile 3D space. It can be
//!   expanded into one dense `Cube` covering the whole map
//!   ([`World::to_cube`](world::World::to_cube)).
//!
//! All operations are synchronous and complete in time proportional to the
//! voxel/block counts involved. The crate performs no I/O: serialization
//! converts between the domain types and `serde` data models, and actual file
//! access is the embedding application's business.
//!
//! ## Crate features
//!
//! This crate, `cubelab`, defines the following feature flags:
//!
//! * `save` (enabled by default):
//!   Enables [`serde`] serialization of [`World`](world::World)s,
//!   [`Cube`](cube::Cube)s, and [`Voxel`](voxel::Voxel)s in the persisted
//!   world document format.
//!
//! ## Dependencies and global state
//!
//! `cubelab` has no global state, but it writes log messages using the
//! [`log`] crate and is therefore subject to that global configuration.
//! It depends on and re-exports [`euclid`] for vector math
//! (as `cubelab::euclid`).

pub mod attributes;
pub mod cube;
pub mod math;
#[cfg(feature = "save")]
mod save;
pub mod voxel;
pub mod world;

// re-export for convenience of callers constructing sizes and points
pub use euclid;
