//! Coordinate types and dense volume storage for the block and voxel grids.

mod vol;
pub use vol::{GridIter, Vol, VolLengthError};

/// Coordinate type for block and voxel positions.
///
/// All grids in this crate are zero-based, so coordinates are unsigned.
pub type GridCoordinate = u32;

/// Coordinate type for continuous-space values derived from grids, such as
/// bounding-sphere radii.
pub type FreeCoordinate = f64;

/// Extent of a 3D grid along each axis.
pub type GridSize = euclid::default::Size3D<GridCoordinate>;

/// Position of a single cell within a grid.
pub type GridPoint = euclid::default::Point3D<GridCoordinate>;

/// Continuous-space point.
pub type FreePoint = euclid::default::Point3D<FreeCoordinate>;

/// Continuous-space vector.
pub type FreeVector = euclid::default::Vector3D<FreeCoordinate>;

// Constructor shorthands, re-exported so that callers of `size3`-accepting
// functions don't need their own `euclid` dependency.
pub use euclid::{point3, size3};
