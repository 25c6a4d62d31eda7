use hexcell::{error::CellSetError, CellIndex, CellSet, LatLng, Resolution};

fn coarser_cousin(index: CellIndex) -> CellIndex {
    index.parent(Resolution::Five).expect("coarser parent exists")
}

fn cell(value: u64) -> CellIndex {
    CellIndex::try_from(value).expect("valid cell index")
}

#[test]
fn empty_set_reports_no_resolution() {
    let set = CellSet::new();

    assert!(set.is_empty());
    assert_eq!(set.resolution(), Err(CellSetError::EmptySet));
}

#[test]
fn resolution_mismatch_is_detected() {
    let fine = cell(0x8a1fb46622dffff);
    let coarse = coarser_cousin(fine);

    let mut set = CellSet::new();
    set.add(fine);
    set.add(coarse);

    assert_eq!(set.resolution(), Err(CellSetError::ResolutionMismatch));
}

#[test]
fn add_contains_and_union() {
    let center = cell(0x8a1fb46622dffff);
    let neighbor = *center
        .grid_disk(1)
        .iter()
        .find(|&&c| c != center)
        .expect("at least one neighbor");

    let mut a = CellSet::new();
    a.add(center);
    let mut b = CellSet::new();
    b.add(neighbor);

    assert!(a.contains(center));
    assert!(!a.contains(neighbor));

    let union = a.union(&b);
    assert_eq!(union.len(), 2);
    assert!(union.contains(center));
    assert!(union.contains(neighbor));

    assert!(!a.intersects(&b));
    assert!(union.intersects(&a));
}

#[test]
fn grid_disk_k0_is_unchanged() {
    let mut set = CellSet::new();
    set.add(cell(0x8a1fb46622dffff));

    let disk = set.grid_disk(0).expect("k=0 never fails");
    assert_eq!(disk, set);
}

#[test]
fn grid_disk_on_empty_set_errors() {
    let set = CellSet::new();

    assert_eq!(set.grid_disk(1), Err(CellSetError::EmptySet));
}

#[test]
fn grid_disk_matches_single_cell_disk() {
    let center = cell(0x8a1fb46622dffff);
    let mut set = CellSet::new();
    set.add(center);

    let disk = set.grid_disk(2).expect("non-empty set");
    let expected = center.grid_disk(2);

    assert_eq!(disk.len(), expected.len());
    for c in expected {
        assert!(disk.contains(c));
    }
}

#[test]
fn boundary_cells_of_small_set_is_itself() {
    let center = cell(0x8a1fb46622dffff);
    let mut set = CellSet::new();
    set.add(center);
    for &c in center.grid_disk(1).iter().filter(|&&c| c != center).take(3) {
        set.add(c);
    }

    // Fewer than 7 cells: every cell is trivially a boundary cell.
    assert_eq!(set.boundary_cells(), set);
}

#[test]
fn boundary_cells_excludes_fully_surrounded_interior() {
    let center = cell(0x8a1fb46622dffff);
    let disk = CellSet::from(center.grid_disk(1));
    let boundary = disk.boundary_cells();

    // Every neighbor of the center is itself in the disk, so the center has
    // no neighbor outside the set: it's the one interior cell.
    assert!(!boundary.contains(center));
}

#[test]
fn grid_distance_zero_for_intersecting_sets() {
    let center = cell(0x8a1fb46622dffff);
    let mut a = CellSet::new();
    a.add(center);
    let mut b = CellSet::new();
    b.add(center);
    b.add(*center.grid_disk(1).iter().find(|&&c| c != center).expect("neighbor"));

    assert_eq!(a.grid_distance(&b), Ok(0));
}

// Spec seed scenario: the single-cell-set analogue of
// gridDistance(0x8f2830828052d25, 0x8f283082a30e623) = 2340 at resolution 15.
#[test]
fn grid_distance_matches_cell_grid_distance_for_singletons() {
    let mut a = CellSet::new();
    a.add(cell(0x8f2830828052d25));
    let mut b = CellSet::new();
    b.add(cell(0x8f283082a30e623));

    assert_eq!(a.grid_distance(&b), Ok(2340));
}

// Spec seed scenario: grid distance between the cells covering San
// Francisco and the cells covering Vallejo, CA (about 35km to the
// north-east), at resolution 7. Each region is built as a wide-enough grid
// disk that its boundary cells land in more than one `PARENT_REDUCTION`
// bucket, so this actually drives the multi-bucket pruning search rather
// than degenerating to the single-bucket case a singleton set exercises.
#[test]
fn grid_distance_multi_cell_buckets_match_brute_force() {
    let san_francisco = LatLng::new(37.774_929, -122.419_416)
        .expect("ll")
        .to_cell(Resolution::Seven);
    let vallejo = LatLng::new(38.104_086, -122.256_637)
        .expect("ll")
        .to_cell(Resolution::Seven);

    let set_a = CellSet::from(san_francisco.grid_disk(4));
    let set_b = CellSet::from(vallejo.grid_disk(4));

    let boundary_parents_a = set_a
        .boundary_cells()
        .iter()
        .filter_map(|cell| cell.parent(Resolution::Five))
        .collect::<std::collections::HashSet<_>>();
    let boundary_parents_b = set_b
        .boundary_cells()
        .iter()
        .filter_map(|cell| cell.parent(Resolution::Five))
        .collect::<std::collections::HashSet<_>>();
    assert!(
        boundary_parents_a.len() > 1 || boundary_parents_b.len() > 1,
        "regions should straddle more than one parent bucket to exercise pruning"
    );

    let distance = set_a.grid_distance(&set_b).expect("same resolution, reachable");

    // The bucketed search is only a pruning optimization over the same
    // pairwise primitive it shares with the naive scan: its result must
    // match a brute-force minimum over every cross pair that's actually
    // computable (a handful of far-apart pairs can cross a pentagon
    // distortion and are simply not comparable; those are skipped here the
    // same way the bucketed search would never have selected them as the
    // minimum anyway).
    let brute_force = set_a
        .iter()
        .flat_map(|a| set_b.iter().map(move |b| (a, b)))
        .filter_map(|(a, b)| a.grid_distance(b).ok())
        .map(|d| d.unsigned_abs())
        .min()
        .expect("at least one comparable pair between the two regions");

    assert_eq!(distance, brute_force);
}

#[test]
fn grid_distance_requires_matching_resolution() {
    let fine = cell(0x8a1fb46622dffff);
    let coarse = coarser_cousin(fine);

    let mut a = CellSet::new();
    a.add(fine);
    let mut b = CellSet::new();
    b.add(coarse);

    assert_eq!(
        a.grid_distance(&b),
        Err(CellSetError::ResolutionMismatch)
    );
}

#[test]
fn from_vec_and_iter_roundtrip() {
    let cells = cell(0x8a1fb46622dffff).grid_disk(1);
    let set = CellSet::from(cells.clone());

    assert_eq!(set.len(), cells.len());
    for c in cells {
        assert!(set.contains(c));
    }
}

#[test]
fn display_lists_every_cell() {
    let center = cell(0x8a1fb46622dffff);
    let mut set = CellSet::new();
    set.add(center);

    assert_eq!(set.to_string(), center.to_string());
}

#[test]
fn display_of_empty_set_is_empty_string() {
    let set = CellSet::new();
    assert_eq!(set.to_string(), "");
}
