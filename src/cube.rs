//! [`Cube`] — the reusable block: a dense volume of voxels with identity
//! metadata.

use std::fmt;

use itertools::Itertools as _;

use crate::attributes::Attributes;
use crate::math::{FreeCoordinate, FreePoint, GridPoint, GridSize, Vol};
use crate::voxel::Voxel;

/// A dense rectangular volume of [`Voxel`]s together with identifying
/// metadata. A `Cube` is the reusable "block" unit which a
/// [`World`](crate::world::World) tiles over space.
///
/// The voxel volume is rectangular by construction (see [`Vol`]); its extents
/// may be zero, in which case the cube contains no voxels at all.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Cube {
    attributes: Attributes,
    voxels: Vol<Voxel>,
}

impl Cube {
    /// Constructs a `Cube` from its metadata and voxel contents.
    pub fn new(attributes: Attributes, voxels: Vol<Voxel>) -> Self {
        Cube { attributes, voxels }
    }

    /// Constructs a `Cube` of the given extents that is entirely filled with
    /// [`Voxel::INVISIBLE`], with default attributes.
    pub fn empty(size: GridSize) -> Self {
        Cube {
            attributes: Attributes::default(),
            voxels: Vol::repeat(size, Voxel::INVISIBLE),
        }
    }

    /// Returns the metadata identifying this cube.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the metadata, for renaming and crediting.
    #[inline]
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Returns the voxel contents.
    #[inline]
    pub fn voxels(&self) -> &Vol<Voxel> {
        &self.voxels
    }

    /// Returns the extent of the voxel volume along each axis.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.voxels.size()
    }

    /// The center of the voxel volume; at a half-voxel position whenever an
    /// extent is odd.
    pub fn center(&self) -> FreePoint {
        let size = self.size().to_f64();
        FreePoint::new(size.width / 2.0, size.height / 2.0, size.depth / 2.0)
    }

    /// Radius of the bounding sphere centered on [`Cube::center`]: the
    /// distance from the center to a corner of the volume.
    pub fn radius(&self) -> FreeCoordinate {
        self.center().to_vector().length()
    }

    /// Returns the element at `point`, or [`None`] if `point` is out of
    /// bounds.
    #[inline]
    pub fn get(&self, point: GridPoint) -> Option<&Voxel> {
        self.voxels.get(point)
    }

    /// Replace the voxel at the given position.
    pub fn set(&mut self, point: GridPoint, voxel: Voxel) -> Result<(), SetVoxelError> {
        match self.voxels.get_mut(point) {
            Some(slot) => {
                *slot = voxel;
                Ok(())
            }
            None => Err(SetVoxelError {
                position: point,
                size: self.voxels.size(),
            }),
        }
    }

    /// The distinct *visible* voxel values present in this cube, in the order
    /// they are first encountered by an x-major scan. Invisible voxels never
    /// appear, and no two entries are equal.
    pub fn voxel_types(&self) -> Vec<Voxel> {
        self.voxels
            .as_linear()
            .iter()
            .copied()
            .filter(|voxel| voxel.visible())
            .unique()
            .collect()
    }

    /// For each distinct visible voxel type, in [`Cube::voxel_types`] order,
    /// an occupancy mask of the same extents as this cube marking which cells
    /// hold that type. This is the form a mesh generator consumes: one
    /// boolean volume per material.
    pub fn voxel_masks(&self) -> Vec<(Voxel, Vol<bool>)> {
        let types = self.voxel_types();
        log::trace!(
            "voxel_masks: {count} distinct types in cube {name:?}",
            count = types.len(),
            name = self.attributes.name,
        );
        types
            .into_iter()
            .map(|voxel_type| {
                (
                    voxel_type,
                    self.voxels.map(|_, &voxel| voxel == voxel_type),
                )
            })
            .collect()
    }

    /// Constructs a new `Cube` of the same extents and attributes by passing
    /// every voxel and its position through `f`.
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Cube
    where
        F: FnMut(GridPoint, Voxel) -> Voxel,
    {
        Cube {
            attributes: self.attributes.clone(),
            voxels: self.voxels.map(|point, &voxel| f(point, voxel)),
        }
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The voxel volume is usually too big to be worth printing.
        f.debug_struct("Cube")
            .field("attributes", &self.attributes)
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl std::ops::Index<GridPoint> for Cube {
    type Output = Voxel;

    /// Returns the voxel at `point`, or panics if `point` is out of bounds.
    ///
    /// Use [`Cube::get`] for a non-panicking alternative.
    #[inline]
    fn index(&self, point: GridPoint) -> &Voxel {
        &self.voxels[point]
    }
}

/// Error from [`Cube::set`] when the position lies outside the cube.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SetVoxelError {
    /// The rejected position.
    pub position: GridPoint,
    /// The extents of the cube the position missed.
    pub size: GridSize,
}

impl std::error::Error for SetVoxelError {}

impl fmt::Display for SetVoxelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "voxel position {position:?} is outside the cube extents {size:?}",
            position = self.position,
            size = self.size,
        )
    }
}
