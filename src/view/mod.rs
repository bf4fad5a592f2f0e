mod disk;
mod grid;

pub use disk::DiskView;
pub use grid::{CellView, GridView, SharedGrid, lock_grid};
