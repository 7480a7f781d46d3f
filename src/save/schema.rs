//! Data types which represent worlds and blocks in the exact shape of the
//! persisted JSON document, so that changes to internal representations will
//! not accidentally leak into the save format via
//! `#[derive(Serialize, Deserialize)]`.
//!
//! As a general rule, types in this file should avoid referring to types
//! outside this file. An additional purpose of keeping all such types here is
//! so that they can be reviewed together to comprehend the format.
//!
//! General properties of the document:
//!
//! * `vox` and `space` are nested arrays in `[x][y][z]` order; they are
//!   required to be rectangular, which [`super::conversion`] validates.
//! * Voxels are 4-element `[r, g, b, a]` arrays.
//! * `space` entries are bare integers: 0 means an empty cell and `n` refers
//!   to the `n`th entry of `cube` (1-based).

use serde::{Deserialize, Serialize};

use crate::world::BlockIndex;

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct WorldSer {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) author: String,
    pub(crate) cube: Vec<CubeSer>,
    pub(crate) space: Vec<Vec<Vec<BlockIndex>>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct CubeSer {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) author: String,
    pub(crate) vox: Vec<Vec<Vec<VoxelSer>>>,
}

pub(crate) type VoxelSer = [u8; 4];
