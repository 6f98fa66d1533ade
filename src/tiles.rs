use smallvec::SmallVec;
use std::convert::From;

use crate::units::{ColumnIndex, RowIndex, Width};

/// The state of one tile in a `TileGrid`.
///
/// `OutOfBounds` is never stored in a grid. It is the sentinel returned by
/// adjacency queries that would step over the grid edge, so callers can treat
/// "wall" and "edge of the world" with one match.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum TileState {
    Blocked,
    Passage,
    Exit,
    OutOfBounds,
}

impl TileState {
    /// Can something stand on a tile in this state?
    #[inline]
    pub fn is_walkable(self) -> bool {
        match self {
            TileState::Passage | TileState::Exit => true,
            TileState::Blocked | TileState::OutOfBounds => false,
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_length: Width) -> Cartesian2DCoordinate {
        let Width(width) = row_length;
        let x = index % width;
        let y = index / width;

        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> Cartesian2DCoordinate {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        Cartesian2DCoordinate::new(col as u32, row as u32)
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// Creates a new coordinate offset 1 tile away in the given direction.
/// Returns None if the coordinate is not representable: stepping North or West
/// from a zero row/column, or overflowing the coordinate space entirely.
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: CompassPrimary)
                         -> Option<Cartesian2DCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        CompassPrimary::North => y.checked_sub(1).map(|new_y| Cartesian2DCoordinate::new(x, new_y)),
        CompassPrimary::South => y.checked_add(1).map(|new_y| Cartesian2DCoordinate::new(x, new_y)),
        CompassPrimary::East => x.checked_add(1).map(|new_x| Cartesian2DCoordinate::new(new_x, y)),
        CompassPrimary::West => x.checked_sub(1).map(|new_x| Cartesian2DCoordinate::new(new_x, y)),
    }
}
