//! [`Voxel`] — the single-cell color unit.

use std::fmt;

/// A single voxel: an 8-bit-per-channel color with an opacity channel.
///
/// The alpha channel doubles as a presence flag: 0 means the cell is empty
/// (invisible), and any nonzero value means it is filled. Two voxels are the
/// same voxel type exactly when all four channels are equal; there is no
/// identity beyond value equality.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Voxel {
    /// Red component.
    pub red: u8,
    /// Green component.
    pub green: u8,
    /// Blue component.
    pub blue: u8,
    /// Opacity; zero means the voxel is not present at all.
    pub alpha: u8,
}

impl Voxel {
    /// The empty cell; identical to `Voxel::default()` except for being a
    /// constant. Expansion of a [`World`](crate::world::World) fills
    /// unoccupied space with this value.
    pub const INVISIBLE: Voxel = Voxel::new(0, 0, 0, 0);

    /// Constructs a voxel from components.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Voxel {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Whether this voxel occupies its cell: true iff the alpha channel is
    /// nonzero.
    #[inline]
    pub const fn visible(self) -> bool {
        self.alpha != 0
    }
}

impl fmt::Debug for Voxel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Voxel(#{r:02X}{g:02X}{b:02X}{a:02X})",
            r = self.red,
            g = self.green,
            b = self.blue,
            a = self.alpha,
        )
    }
}
