//! [`World`] — a sparse map of block ids over a palette of [`Cube`]s.

use std::fmt;

use euclid::{point3, size3};

use crate::attributes::Attributes;
use crate::cube::Cube;
use crate::math::{GridIter, GridPoint, GridSize, Vol};
use crate::voxel::Voxel;

mod palette;
use palette::Palette;
pub use palette::PaletteError;


/// Number used in a [`World`]'s space to identify the block filling a cell.
///
/// `0` means the cell is empty; any other value `n` refers to the world's
/// `n`th palette block (1-based).
pub type BlockIndex = u16;

/// A sparse grid of block ids (a "map") referencing a palette of [`Cube`]s,
/// describing how blocks tile 3D space. The main data structure of an
/// editing session.
///
/// A `World` may be in a dimensionally inconsistent state — its invariants
/// are checked by [`World::check_integrity`] when asked, and by the
/// operations that depend on them, not at construction time. The exception
/// is the [`World::add_cube`] mutation path, which refuses to introduce an
/// inconsistency.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct World {
    attributes: Attributes,
    palette: Palette,
    /// Invariant-free by construction: `Vol` is rectangular, and ids are
    /// validated where they are dereferenced.
    space: Vol<BlockIndex>,
}

impl World {
    /// Constructs a `World` from its parts.
    ///
    /// No invariant is checked here; a palette of mismatched blocks or a
    /// space full of dangling ids is accepted and will be reported by
    /// [`World::check_integrity`] or fail the operations that depend on it.
    pub fn new(attributes: Attributes, blocks: Vec<Cube>, space: Vol<BlockIndex>) -> Self {
        World {
            attributes,
            palette: Palette::from_cubes(blocks),
            space,
        }
    }

    /// Constructs a `World` of the given extents with an empty palette and
    /// every cell empty (id 0), with default attributes.
    pub fn empty(size: GridSize) -> Self {
        World {
            attributes: Attributes::default(),
            palette: Palette::new(),
            space: Vol::repeat(size, 0),
        }
    }

    /// Returns the metadata identifying this world.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the metadata, for renaming and crediting.
    #[inline]
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Returns the id grid describing which block fills each cell.
    #[inline]
    pub fn space(&self) -> &Vol<BlockIndex> {
        &self.space
    }

    /// Extent of the map along each axis, measured in blocks.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.space.size()
    }

    /// Extents shared by every palette block, measured in voxels.
    ///
    /// Fails with [`PaletteError::NoBlocks`] when no block has been defined
    /// yet, or [`PaletteError::Mismatched`] when the palette is inconsistent.
    pub fn cube_size(&self) -> Result<GridSize, WorldError> {
        Ok(self.palette.uniform_size()?)
    }

    /// The palette of blocks this world's ids refer to.
    #[inline]
    pub fn blocks(&self) -> &[Cube] {
        self.palette.entries()
    }

    /// Get a palette block by id. Id 0 ("empty") and ids beyond the palette
    /// yield [`None`].
    #[inline]
    pub fn block(&self, index: BlockIndex) -> Option<&Cube> {
        self.palette.entry(index)
    }

    /// Returns the id at `point`, or [`None`] if `point` is out of bounds.
    #[inline]
    pub fn get(&self, point: GridPoint) -> Option<BlockIndex> {
        self.space.get(point).copied()
    }

    /// Replace the id at the given position.
    ///
    /// Fails if the position is out of bounds or if `index` does not name a
    /// palette block (id 0 is always accepted).
    pub fn set(&mut self, point: GridPoint, index: BlockIndex) -> Result<(), WorldError> {
        if index != 0 && self.palette.entry(index).is_none() {
            return Err(WorldError::UnknownBlock {
                index,
                position: point,
                palette_len: self.palette.len(),
            });
        }
        match self.space.get_mut(point) {
            Some(slot) => {
                *slot = index;
                Ok(())
            }
            None => Err(WorldError::OutOfBounds {
                position: point,
                size: self.space.size(),
            }),
        }
    }

    /// Appends a block to the palette and returns its assigned 1-based id.
    ///
    /// Fails if the palette is non-empty and the new block's extents differ
    /// from the existing blocks'.
    pub fn add_cube(&mut self, cube: Cube) -> Result<BlockIndex, WorldError> {
        Ok(self.palette.try_push(cube)?)
    }

    /// Checks the world's dimensional invariants: every palette block must
    /// share identical extents. (The id grid is rectangular by construction;
    /// malformed serialized data is rejected at parse time.)
    ///
    /// Operations that depend on these invariants, such as
    /// [`World::to_cube`], perform this check themselves.
    pub fn check_integrity(&self) -> Result<(), WorldError> {
        if !self.palette.is_empty() {
            self.palette.uniform_size()?;
        }
        Ok(())
    }

    /// The distinct visible voxel values appearing anywhere in the palette,
    /// deduplicated across blocks, in first-seen order.
    pub fn voxel_types(&self) -> Vec<Voxel> {
        self.palette.voxel_types()
    }

    /// Expands the sparse id grid into one dense [`Cube`] covering the whole
    /// map, carrying this world's attributes.
    ///
    /// Each output voxel is looked up by locating its owning block
    /// (per-axis integer division of the voxel coordinate by the block
    /// extents) and taking that block's voxel at the coordinate remainder.
    /// Empty cells (id 0) expand to [`Voxel::INVISIBLE`].
    ///
    /// Fails if the palette is empty or dimensionally inconsistent, or if
    /// the space contains an id with no corresponding palette block.
    pub fn to_cube(&self) -> Result<Cube, WorldError> {
        let block_size = self.palette.uniform_size()?;
        let map_size = self.size();
        let output_size = size3(
            map_size.width * block_size.width,
            map_size.height * block_size.height,
            map_size.depth * block_size.depth,
        );

        let points = GridIter::new(output_size);
        let mut contents: Vec<Voxel> = Vec::with_capacity(points.len());
        for p in points {
            let cell = point3(
                p.x / block_size.width,
                p.y / block_size.height,
                p.z / block_size.depth,
            );
            contents.push(match self.space[cell] {
                0 => Voxel::INVISIBLE,
                index => {
                    let cube = self.palette.entry(index).ok_or(WorldError::UnknownBlock {
                        index,
                        position: cell,
                        palette_len: self.palette.len(),
                    })?;
                    cube.voxels()[point3(
                        p.x % block_size.width,
                        p.y % block_size.height,
                        p.z % block_size.depth,
                    )]
                }
            });
        }
        log::trace!(
            "expanded world {name:?} ({map_size:?} blocks) to {output_size:?} voxels",
            name = self.attributes.name,
        );

        Ok(Cube::new(
            self.attributes.clone(),
            Vol::from_elements(output_size, contents)
                .expect("world expansion produced the wrong number of voxels"),
        ))
    }

    /// Constructs a new `World` with the same palette and attributes by
    /// passing every id and its position through `f`.
    ///
    /// The ids produced by `f` are not validated, matching the lazy
    /// integrity contract of [`World::new`].
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> World
    where
        F: FnMut(GridPoint, BlockIndex) -> BlockIndex,
    {
        World {
            attributes: self.attributes.clone(),
            palette: self.palette.clone(),
            space: self.space.map(|point, &index| f(point, index)),
        }
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Make the assumption that a World is too big to print in its entirety.
        f.debug_struct("World")
            .field("attributes", &self.attributes)
            .field("size", &self.size())
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

/// Errors that can occur when operating on a [`World`] whose parts don't
/// agree with each other.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum WorldError {
    /// The palette is missing, inconsistent, or full.
    Palette(PaletteError),

    /// The space refers to a block id with no corresponding palette entry.
    UnknownBlock {
        /// The dangling id.
        index: BlockIndex,
        /// The map cell holding it.
        position: GridPoint,
        /// Length of the palette it missed.
        palette_len: usize,
    },

    /// A position outside the world's extents.
    OutOfBounds {
        /// The rejected position.
        position: GridPoint,
        /// The extents of the map the position missed.
        size: GridSize,
    },
}

impl From<PaletteError> for WorldError {
    fn from(error: PaletteError) -> Self {
        WorldError::Palette(error)
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorldError::Palette(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::Palette(error) => write!(f, "{error}"),
            WorldError::UnknownBlock {
                index,
                position,
                palette_len,
            } => write!(
                f,
                "block id {index} at {position:?} exceeds palette length {palette_len}",
            ),
            WorldError::OutOfBounds { position, size } => write!(
                f,
                "position {position:?} is outside the world extents {size:?}",
            ),
        }
    }
}
