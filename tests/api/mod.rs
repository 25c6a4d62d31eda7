mod base_cell;
mod cell_index;
mod cell_set;
mod direction;
mod face;
mod face_set;
mod grid;
mod index_mode;
mod latlng;
mod localij;
mod resolution;

#[test]
fn max_grid_disk_size_overflow() {
    assert_eq!(hexcell::max_grid_disk_size(4294967295), 569_707_381_193_162);
}
