//! Table of the blocks a world may reference.

use std::fmt;

use itertools::Itertools as _;

use crate::cube::Cube;
use crate::math::GridSize;
use crate::voxel::Voxel;
use crate::world::BlockIndex;

/// Table of the [`Cube`]s in a [`World`](super::World) independent of their
/// locations, addressed by 1-based [`BlockIndex`]; index 0 is reserved to
/// mean "empty cell" and never refers to an entry.
///
/// The palette's invariant — every entry shares the same extents — is
/// enforced on the [`try_push`](Palette::try_push) mutation path but only
/// checked lazily, via [`uniform_size`](Palette::uniform_size), for palettes
/// assembled wholesale.
#[derive(Clone, Eq, Hash, PartialEq)]
pub(crate) struct Palette {
    entries: Vec<Cube>,
}

impl Palette {
    /// Constructs an empty `Palette`.
    pub(crate) fn new() -> Self {
        Palette {
            entries: Vec::new(),
        }
    }

    /// Constructs a `Palette` from the given blocks, without checking the
    /// uniform-extents invariant.
    pub(crate) fn from_cubes(entries: Vec<Cube>) -> Self {
        Palette { entries }
    }

    pub(crate) fn entries(&self) -> &[Cube] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by 1-based index. Index 0 ("empty") and out-of-range
    /// indices yield [`None`].
    pub(crate) fn entry(&self, index: BlockIndex) -> Option<&Cube> {
        let index = usize::from(index).checked_sub(1)?;
        self.entries.get(index)
    }

    /// Appends a block and returns its assigned 1-based index.
    ///
    /// Fails if the palette is non-empty and the new block's extents differ
    /// from the existing entries', or if the palette is out of indices.
    pub(crate) fn try_push(&mut self, cube: Cube) -> Result<BlockIndex, PaletteError> {
        if let Some(first) = self.entries.first() {
            let expected = first.size();
            let actual = cube.size();
            if actual != expected {
                return Err(PaletteError::Mismatched {
                    index: self.entries.len(),
                    expected,
                    actual,
                });
            }
        }
        // Index 0 is reserved, so the last usable index is BlockIndex::MAX.
        if self.entries.len() >= usize::from(BlockIndex::MAX) {
            return Err(PaletteError::TooManyBlocks {
                len: self.entries.len(),
            });
        }
        self.entries.push(cube);
        Ok(self.entries.len() as BlockIndex)
    }

    /// Returns the extents shared by every entry.
    ///
    /// Fails with [`PaletteError::NoBlocks`] when the palette is empty and
    /// [`PaletteError::Mismatched`] when the entries disagree.
    pub(crate) fn uniform_size(&self) -> Result<GridSize, PaletteError> {
        let first = self.entries.first().ok_or(PaletteError::NoBlocks)?;
        let expected = first.size();
        for (index, cube) in self.entries.iter().enumerate() {
            let actual = cube.size();
            if actual != expected {
                return Err(PaletteError::Mismatched {
                    index,
                    expected,
                    actual,
                });
            }
        }
        Ok(expected)
    }

    /// The distinct visible voxel values appearing anywhere in the palette,
    /// deduplicated across entries, in first-seen order.
    pub(crate) fn voxel_types(&self) -> Vec<Voxel> {
        self.entries
            .iter()
            .flat_map(Cube::voxel_types)
            .unique()
            .collect()
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Inherit the alternate/prettyprint state, but don't put any
        // prettyprint space between the () and the [].
        write!(f, "Palette(")?;
        fmt::Debug::fmt(&self.entries, f)?;
        write!(f, ")")
    }
}

/// Errors that can occur in the palette of a [`World`](super::World):
/// inconsistent block extents, or block lookups with nothing to look up.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PaletteError {
    /// The palette contains no blocks, so block extents are undefined.
    NoBlocks,

    /// A block's extents disagree with the rest of the palette.
    Mismatched {
        /// Position of the offending entry within the palette (0-based).
        index: usize,
        /// The extents shared by the preceding entries.
        expected: GridSize,
        /// The offending entry's extents.
        actual: GridSize,
    },

    /// The palette is larger than the maximum supported length.
    TooManyBlocks {
        /// The current length.
        len: usize,
    },
}

impl std::error::Error for PaletteError {}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::NoBlocks => write!(f, "world has no block defined"),
            PaletteError::Mismatched {
                index,
                expected,
                actual,
            } => write!(
                f,
                "blocks have unequal sizes: block {index} is {actual:?} \
                    but the palette's blocks are {expected:?}",
            ),
            PaletteError::TooManyBlocks { len } => {
                write!(f, "a palette of {len} blocks is too large")
            }
        }
    }
}
