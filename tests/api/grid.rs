use hexcell::{CellIndex, LatLng, Resolution};

#[test]
fn grid_disk_distances_match_grid_disk() {
    let index = CellIndex::try_from(0x8a1fb46622dffff).expect("index");

    let disk = index.grid_disk(2);
    let distances = index.grid_disk_distances(2);

    assert_eq!(disk.len(), distances.len());
    for (cell, _) in &distances {
        assert!(disk.contains(cell), "{cell} missing from the plain disk");
    }
    // The origin is always part of its own disk, at distance 0.
    assert!(distances.iter().any(|&(cell, dist)| cell == index && dist == 0));
}

#[test]
fn grid_disk_k0_is_just_the_origin() {
    let index = CellIndex::try_from(0x8a1fb46622dffff).expect("index");

    assert_eq!(index.grid_disk(0), vec![index]);
}

#[test]
fn grid_disk_fast_and_safe_agree_on_hexagon_origin() {
    // A hexagon far enough from any pentagon never triggers the fast-path
    // bailout, so both algorithms must produce the same set of cells.
    let index = CellIndex::try_from(0x8a1fb46622dffff).expect("index");

    let fast = index
        .grid_disk_fast(2)
        .collect::<Option<Vec<_>>>()
        .expect("no pentagon distortion expected here");
    let safe = index.grid_disk_distances_safe(2).collect::<Vec<_>>();

    assert_eq!(fast.len(), safe.len());
    for (cell, dist) in &safe {
        assert!(fast.contains(&(*cell, *dist)));
    }
}

#[test]
fn grid_ring_fast_is_included_in_grid_disk() {
    let index = CellIndex::try_from(0x8a1fb46622dffff).expect("index");
    let ring = index
        .grid_ring_fast(2)
        .collect::<Option<Vec<_>>>()
        .expect("no pentagon distortion expected here");
    let disk = index.grid_disk(2);

    for cell in ring {
        assert!(disk.contains(&cell));
    }
}

// Spec seed scenario: gridDistance(0x8f2830828052d25, 0x8f283082a30e623) = 2340
// at resolution 15.
#[test]
fn grid_distance_seed_scenario() {
    let src = CellIndex::try_from(0x8f2830828052d25).expect("src");
    let dst = CellIndex::try_from(0x8f283082a30e623).expect("dst");

    assert_eq!(src.grid_distance(dst), Ok(2340));
}

#[test]
fn grid_distance_is_symmetric_and_zero_for_self() {
    let index = CellIndex::try_from(0x8a1fb46622dffff).expect("index");

    assert_eq!(index.grid_distance(index), Ok(0));

    let neighbor = index
        .grid_disk(1)
        .into_iter()
        .find(|&cell| cell != index)
        .expect("at least one neighbor");

    assert_eq!(index.grid_distance(neighbor), neighbor.grid_distance(index));
}

// Spec seed scenario: a grid disk whose origin is a pentagonal base cell
// aborts the fast ring-walk and falls back to the safe BFS, which doesn't
// preserve ring order: the origin ends up at whatever index the hash-probed
// fallback happens to place it, here index 3 of 7.
#[test]
fn grid_disk_around_pentagon_reorders_via_safe_fallback() {
    let origin = LatLng::new(37.813_318, -122.409_29)
        .expect("ll")
        .to_cell(Resolution::Zero);
    assert!(origin.is_pentagon(), "San Francisco sits on a pentagon base cell");

    assert!(
        origin.grid_disk_fast(1).collect::<Option<Vec<_>>>().is_none(),
        "fast path must abort on a pentagon"
    );

    let distances = origin
        .grid_disk_distances_safe(1)
        .collect::<Vec<_>>();

    assert_eq!(distances.len(), 7);
    let mut dist_values: Vec<u32> =
        distances.iter().map(|&(_, dist)| dist).collect();
    dist_values.sort_unstable();
    assert_eq!(dist_values, vec![0, 1, 1, 1, 1, 1, 1]);
    assert!(distances.iter().any(|&(cell, dist)| cell == origin && dist == 0));
}

#[test]
fn children_count_matches_children_len() {
    let index = CellIndex::try_from(0x8a1fb46622dffff).expect("index");

    assert_eq!(
        index.children(Resolution::Fifteen).count() as u64,
        index.children_count(Resolution::Fifteen)
    );
}

#[test]
fn grid_path_cells_starts_and_ends_on_endpoints() {
    let origin = CellIndex::try_from(0x8a1fb46622dffff).expect("origin");
    let destination = origin
        .grid_disk(1)
        .into_iter()
        .find(|&cell| cell != origin)
        .expect("at least one neighbor");

    let path = origin
        .grid_path_cells(destination)
        .expect("same-resolution neighbors never hit a pentagon distortion")
        .collect::<Result<Vec<_>, _>>()
        .expect("no pentagon distortion along the path");

    assert_eq!(path.first().copied(), Some(origin));
    assert_eq!(path.last().copied(), Some(destination));
}
