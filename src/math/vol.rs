//! Dense 3D arrays stored as linear slices. This module is private but
//! reexported by its parent.

use std::fmt;
use std::iter::FusedIterator;
use std::ops;

use crate::math::{GridPoint, GridSize};

/// A dense 3-dimensional array with arbitrary element type.
///
/// The elements are stored in a single linear allocation in x-major order:
/// linearly adjacent elements have adjacent z coordinates, matching the
/// nesting order of a `data[x][y][z]` array. Because the extents are stored
/// alongside the elements, a [`Vol`] is rectangular by construction; there is
/// no such thing as a ragged one.
///
/// A [`Vol`] whose volume exceeds [`usize::MAX`] cannot exist.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Vol<V> {
    size: GridSize,
    /// Invariant: `contents.len()` equals the volume of `size`.
    contents: Box<[V]>,
}

impl<V> Vol<V> {
    /// Constructs a [`Vol`] by using the provided function to compute a value
    /// for each point.
    ///
    /// Panics if the volume of `size` exceeds [`usize::MAX`]. (But there will
    /// likely be a memory allocation failure well below that point.)
    pub fn from_fn<F>(size: GridSize, f: F) -> Self
    where
        F: FnMut(GridPoint) -> V,
    {
        checked_volume(size).expect("Vol::from_fn: volume too large");
        Vol {
            size,
            contents: GridIter::new(size).map(f).collect(),
        }
    }

    /// Constructs a [`Vol`] containing the provided elements, which must be in
    /// x-major order.
    ///
    /// Returns a [`VolLengthError`] if the number of elements does not match
    /// the volume of `size`.
    pub fn from_elements(
        size: GridSize,
        elements: impl Into<Box<[V]>>,
    ) -> Result<Self, VolLengthError> {
        let elements = elements.into();
        if checked_volume(size) == Some(elements.len()) {
            Ok(Vol {
                size,
                contents: elements,
            })
        } else {
            Err(VolLengthError {
                input_length: elements.len(),
                size,
            })
        }
    }

    /// Constructs a [`Vol`] by cloning the provided value for each point.
    pub fn repeat(size: GridSize, value: V) -> Self
    where
        V: Clone,
    {
        Self::from_fn(size, |_| value.clone())
    }

    /// Returns the extent of this volume along each axis.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the volume, also known as the number of elements.
    #[inline]
    pub fn volume(&self) -> usize {
        self.contents.len()
    }

    /// Determines whether a point lies within the extents and, if it does,
    /// returns the linear index for it.
    ///
    /// ```
    /// use cubelab::math::{point3, size3, Vol};
    ///
    /// let vol: Vol<u8> = Vol::repeat(size3(10, 10, 10), 0);
    /// assert_eq!(vol.index(point3(0, 0, 0)), Some(0));
    /// assert_eq!(vol.index(point3(1, 2, 3)), Some(123));
    /// assert_eq!(vol.index(point3(9, 9, 9)), Some(999));
    /// assert_eq!(vol.index(point3(0, 0, 10)), None);
    /// ```
    #[inline(always)] // hot in world expansion
    pub fn index(&self, point: GridPoint) -> Option<usize> {
        if point.x >= self.size.width || point.y >= self.size.height || point.z >= self.size.depth
        {
            return None;
        }
        Some(
            (point.x as usize * self.size.height as usize + point.y as usize)
                * self.size.depth as usize
                + point.z as usize,
        )
    }

    /// Returns the element at `point`, or [`None`] if `point` is out of
    /// bounds.
    #[inline]
    pub fn get(&self, point: GridPoint) -> Option<&V> {
        self.index(point).map(|index| &self.contents[index])
    }

    /// Returns a mutable reference to the element at `point`, or [`None`] if
    /// `point` is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, point: GridPoint) -> Option<&mut V> {
        self.index(point).map(move |index| &mut self.contents[index])
    }

    /// Returns the linear contents viewed as a slice, in x-major order.
    #[inline]
    pub fn as_linear(&self) -> &[V] {
        &self.contents
    }

    /// Iterates over all elements together with their positions, in x-major
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPoint, &V)> + '_ {
        GridIter::new(self.size).zip(self.contents.iter())
    }

    /// Constructs a new [`Vol`] of the same extents by applying `f` to every
    /// element and its position.
    pub fn map<U, F>(&self, mut f: F) -> Vol<U>
    where
        F: FnMut(GridPoint, &V) -> U,
    {
        Vol {
            size: self.size,
            contents: self.iter().map(|(point, value)| f(point, value)).collect(),
        }
    }
}

impl<V> ops::Index<GridPoint> for Vol<V> {
    type Output = V;

    /// Returns the element at `point`, or panics if `point` is out of bounds.
    ///
    /// Use [`Vol::get`] for a non-panicking alternative.
    #[inline(always)]
    fn index(&self, point: GridPoint) -> &V {
        match self.index(point) {
            Some(index) => &self.contents[index],
            None => panic!("position {point:?} out of range {size:?}", size = self.size),
        }
    }
}

/// Compute volume with checked arithmetic. In a function solely for the
/// convenience of the `?` operator without which this is even worse.
fn checked_volume(size: GridSize) -> Option<usize> {
    let mut volume: usize = 1;
    for extent in [size.width, size.height, size.depth] {
        volume = volume.checked_mul(usize::try_from(extent).ok()?)?;
    }
    Some(volume)
}

/// Iterator over all points of a [`GridSize`]'s extents, in x-major order
/// (the linear order of a [`Vol`]'s contents).
#[derive(Clone, Debug)]
pub struct GridIter {
    size: GridSize,
    cursor: GridPoint,
}

impl GridIter {
    /// Iterate over every point within `size`, starting at the origin.
    #[inline]
    pub fn new(size: GridSize) -> Self {
        let mut cursor = GridPoint::origin();
        if size.height == 0 || size.depth == 0 {
            // Nothing to yield; park the cursor past the end.
            cursor.x = size.width;
        }
        Self { size, cursor }
    }

    fn remaining(&self) -> usize {
        if self.cursor.x >= self.size.width {
            return 0;
        }
        let height = self.size.height as usize;
        let depth = self.size.depth as usize;
        let consumed = (self.cursor.x as usize * height + self.cursor.y as usize) * depth
            + self.cursor.z as usize;
        self.size.width as usize * height * depth - consumed
    }
}

impl Iterator for GridIter {
    type Item = GridPoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.x >= self.size.width {
            return None;
        }
        let result = self.cursor;
        self.cursor.z += 1;
        if self.cursor.z >= self.size.depth {
            self.cursor.z = 0;
            self.cursor.y += 1;
            if self.cursor.y >= self.size.height {
                self.cursor.y = 0;
                self.cursor.x += 1;
                // When x becomes out of bounds, that signals the end.
            }
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter {}
impl FusedIterator for GridIter {}

/// Error when a [`Vol`] cannot be constructed because the element count does
/// not match the requested extents.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VolLengthError {
    input_length: usize,
    size: GridSize,
}

impl std::error::Error for VolLengthError {}

impl fmt::Display for VolLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data of length {len} does not fill a volume of {size:?}",
            len = self.input_length,
            size = self.size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{point3, size3};

    #[test]
    fn from_fn_matches_from_elements() {
        let size = size3(4, 1, 1);
        assert_eq!(
            Vol::from_fn(size, |p| p.x),
            Vol::from_elements(size, vec![0u32, 1, 2, 3]).unwrap(),
        );
    }

    #[test]
    fn from_elements_wrong_length() {
        let size: GridSize = size3(4, 1, 1);
        let error = Vol::from_elements(size, vec![0u32, 1, 2]).unwrap_err();
        assert_eq!(
            error.to_string(),
            format!("data of length 3 does not fill a volume of {size:?}"),
        );
    }

    #[test]
    fn iter_is_x_major() {
        let vol = Vol::from_fn(size3(1, 2, 3), |p| p);
        assert_eq!(
            vol.iter().map(|(p, _)| p).collect::<Vec<_>>(),
            vec![
                point3(0, 0, 0),
                point3(0, 0, 1),
                point3(0, 0, 2),
                point3(0, 1, 0),
                point3(0, 1, 1),
                point3(0, 1, 2),
            ],
        );
        // Points and elements line up.
        assert!(vol.iter().all(|(p, &v)| p == v));
    }

    #[test]
    fn zero_extent_is_empty() {
        for size in [size3(0, 5, 5), size3(5, 0, 5), size3(5, 5, 0)] {
            let vol: Vol<u8> = Vol::repeat(size, 0);
            assert_eq!(vol.volume(), 0, "{size:?}");
            assert_eq!(GridIter::new(size).count(), 0, "{size:?}");
        }
    }

    #[test]
    fn grid_iter_size_hint_is_exact() {
        let size = size3(2, 3, 4);
        let mut iter = GridIter::new(size);
        let expected = 24;
        assert_eq!(iter.size_hint(), (expected, Some(expected)));
        for remaining in (1..=expected).rev() {
            assert_eq!(iter.size_hint(), (remaining, Some(remaining)));
            assert!(iter.next().is_some());
        }
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert!(iter.next().is_none());
    }

    #[test]
    fn get_and_index_agree() {
        let vol = Vol::from_fn(size3(2, 2, 2), |p| p.x * 100 + p.y * 10 + p.z);
        assert_eq!(vol.get(point3(1, 0, 1)), Some(&101));
        assert_eq!(vol[point3(1, 0, 1)], 101);
        assert_eq!(vol.get(point3(2, 0, 0)), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_panics_out_of_range() {
        let vol: Vol<u8> = Vol::repeat(size3(1, 1, 1), 0);
        let _ = vol[point3(0, 1, 0)];
    }
}
