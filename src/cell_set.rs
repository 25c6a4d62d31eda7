use crate::{error::CellSetError, CellIndex, Resolution};
use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use std::fmt;

/// Number of resolution levels climbed before bucketing boundary cells
/// together when computing the distance between two sets.
///
/// Grouping cells by a coarser-than-native parent keeps the number of
/// parent-to-parent distance computations manageable even for large sets,
/// at the cost of a final exhaustive pass restricted to the most promising
/// buckets.
const PARENT_REDUCTION: u8 = 2;

/// An unordered collection of distinct cells, all sharing the same
/// resolution.
///
/// Unlike [`CellIndex`], which represents a single cell, a `CellSet`
/// represents an arbitrary (and not necessarily contiguous) region of the
/// grid, built up cell by cell, and supports the usual set operations plus
/// a handful of grid-aware ones (expanding the region, extracting its
/// outline, measuring the distance to another region).
///
/// # Example
///
/// ```
/// use hexcell::{CellIndex, CellSet};
///
/// let center = CellIndex::try_from(0x8a1fb46622dffff)?;
/// let mut set = CellSet::new();
/// set.add(center);
///
/// assert!(set.contains(center));
/// # Ok::<(), hexcell::error::InvalidCellIndex>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet(HashSet<CellIndex>);

impl CellSet {
    /// Initializes a new, empty cell set.
    #[must_use]
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    /// Initializes a new, empty cell set with at least the specified
    /// capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity(capacity))
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set contains no cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains the given cell.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.0.contains(&cell)
    }

    /// Adds a cell to the set, returning whether it was newly inserted.
    pub fn add(&mut self, cell: CellIndex) -> bool {
        self.0.insert(cell)
    }

    /// Returns an iterator over the cells of the set, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.0.iter().copied()
    }

    /// Returns the union of this set and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).copied().collect())
    }

    /// Returns true if this set and `other` share at least one cell.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.0.iter().any(|cell| other.0.contains(cell))
    }

    /// Returns the resolution shared by every cell of the set.
    ///
    /// # Errors
    ///
    /// [`CellSetError::EmptySet`] if the set is empty, or
    /// [`CellSetError::ResolutionMismatch`] if the cells don't all share the
    /// same resolution.
    pub fn resolution(&self) -> Result<Resolution, CellSetError> {
        let mut cells = self.0.iter();
        let resolution =
            cells.next().ok_or(CellSetError::EmptySet)?.resolution();

        cells
            .all(|cell| cell.resolution() == resolution)
            .then_some(resolution)
            .ok_or(CellSetError::ResolutionMismatch)
    }

    /// Returns a new set containing every cell within `k` grid steps of a
    /// cell of this set (including the cells of this set itself).
    ///
    /// A `k` of 0 simply returns a clone of the set, even if it's empty.
    ///
    /// # Errors
    ///
    /// [`CellSetError::EmptySet`] if `k` is non-zero and the set is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use hexcell::{CellIndex, CellSet};
    ///
    /// let center = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let mut set = CellSet::new();
    /// set.add(center);
    ///
    /// let disk = set.grid_disk(1)?;
    /// assert_eq!(disk.len(), center.grid_disk(1).len());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn grid_disk(&self, k: u32) -> Result<Self, CellSetError> {
        if k == 0 {
            return Ok(self.clone());
        }
        if self.0.is_empty() {
            return Err(CellSetError::EmptySet);
        }

        let mut result = self.clone();
        let mut shell: Vec<CellIndex> = self.0.iter().copied().collect();

        for _ in 0..k {
            let mut next_shell = HashSet::new();
            for cell in &shell {
                for neighbor in cell.grid_disk(1) {
                    if result.0.insert(neighbor) {
                        next_shell.insert(neighbor);
                    }
                }
            }
            if next_shell.is_empty() {
                break;
            }
            shell = next_shell.into_iter().collect();
        }

        Ok(result)
    }

    /// Returns the subset of cells that have at least one grid neighbor
    /// outside of the set.
    ///
    /// If the set has fewer than 7 cells, every cell trivially qualifies and
    /// the whole set is returned unchanged.
    #[must_use]
    pub fn boundary_cells(&self) -> Self {
        if self.0.len() < 7 {
            return self.clone();
        }

        Self(
            self.0
                .iter()
                .copied()
                .filter(|cell| {
                    cell.grid_disk(1)
                        .into_iter()
                        .any(|neighbor| !self.0.contains(&neighbor))
                })
                .collect(),
        )
    }

    /// Returns the grid distance between this set and `other`, i.e. the
    /// minimum grid distance between any cell of this set and any cell of
    /// `other`.
    ///
    /// If the two sets intersect, the distance is 0.
    ///
    /// # Errors
    ///
    /// [`CellSetError::EmptySet`] if either set is empty,
    /// [`CellSetError::ResolutionMismatch`] if the two sets don't share the
    /// same resolution, or [`CellSetError::LocalIj`] if the underlying
    /// per-cell distance computation runs into a pentagon distortion.
    ///
    /// # Example
    ///
    /// ```
    /// use hexcell::{CellIndex, CellSet};
    ///
    /// let a = CellIndex::try_from(0x8f2830828052d25)?;
    /// let b = CellIndex::try_from(0x8f283082a30e623)?;
    ///
    /// let mut set_a = CellSet::new();
    /// set_a.add(a);
    /// let mut set_b = CellSet::new();
    /// set_b.add(b);
    ///
    /// assert_eq!(set_a.grid_distance(&set_b), Ok(2340));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn grid_distance(&self, other: &Self) -> Result<u32, CellSetError> {
        let resolution = self.resolution()?;
        let other_resolution = other.resolution()?;

        if resolution != other_resolution {
            return Err(CellSetError::ResolutionMismatch);
        }
        if self.intersects(other) {
            return Ok(0);
        }

        let parent_resolution = resolution
            .pred()
            .and_then(Resolution::pred)
            .unwrap_or(Resolution::Zero);

        let buckets_a = bucket_by_parent(self.boundary_cells(), parent_resolution);
        let buckets_b = bucket_by_parent(other.boundary_cells(), parent_resolution);

        let mut parent_distances: Vec<(i32, &Vec<CellIndex>, &Vec<CellIndex>)> =
            Vec::new();
        for (&parent_a, cells_a) in &buckets_a {
            for (&parent_b, cells_b) in &buckets_b {
                let distance = parent_a.grid_distance(parent_b)?;
                parent_distances.push((distance, cells_a, cells_b));
            }
        }

        let min_parent_distance = parent_distances
            .iter()
            .map(|&(distance, ..)| distance)
            .min()
            .unwrap_or(0);
        let threshold = min_parent_distance + i32::from(PARENT_REDUCTION);

        let mut min_distance = u32::MAX;
        for (distance, cells_a, cells_b) in parent_distances {
            if distance > threshold {
                continue;
            }
            for &cell_a in cells_a {
                for &cell_b in cells_b {
                    let cell_distance = cell_a.grid_distance(cell_b)?.unsigned_abs();
                    min_distance = min_distance.min(cell_distance);
                }
            }
        }

        Ok(min_distance)
    }
}

/// Groups the cells of `set` by their ancestor at `parent_resolution`.
fn bucket_by_parent(
    set: CellSet,
    parent_resolution: Resolution,
) -> HashMap<CellIndex, Vec<CellIndex>> {
    let mut buckets = HashMap::new();
    for cell in set.iter() {
        let parent = cell.parent(parent_resolution).unwrap_or(cell);
        buckets.entry(parent).or_default().push(cell);
    }
    buckets
}

impl FromIterator<CellIndex> for CellSet {
    fn from_iter<T: IntoIterator<Item = CellIndex>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<CellIndex>> for CellSet {
    fn from(cells: Vec<CellIndex>) -> Self {
        cells.into_iter().collect()
    }
}

impl IntoIterator for CellSet {
    type Item = CellIndex;
    type IntoIter = std::collections::hash_set::IntoIter<CellIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = self.0.iter();
        if let Some(first) = cells.next() {
            write!(f, "{first}")?;
            for cell in cells {
                write!(f, ",{cell}")?;
            }
        }
        Ok(())
    }
}
