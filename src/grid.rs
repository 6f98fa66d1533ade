use itertools::Itertools;
use std::error;
use std::fmt;

use crate::tiles::{offset_coordinate, Cartesian2DCoordinate, CompassPrimary, CoordinateSmallVec,
                   TileState};
use crate::units::{Height, Width};

/// A fixed size grid of tile states, row-major.
///
/// The dimensions are set at construction and never change. A maze generator
/// mutates the tile states once; afterwards the grid is only read through
/// `tile` and `tile_towards`.
pub struct TileGrid {
    tiles: Vec<TileState>,
    width: Width,
    height: Height,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridCreationError {
    InvalidDimensions,
}

impl fmt::Display for GridCreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridCreationError::InvalidDimensions => {
                write!(f, "Grid dimensions must both be at least one tile")
            }
        }
    }
}

impl error::Error for GridCreationError {
    fn description(&self) -> &str {
        "invalid grid dimensions"
    }
}

impl TileGrid {
    /// Create a grid with every tile `Blocked`.
    ///
    /// Fails with `InvalidDimensions` before any allocation if either
    /// dimension is zero.
    pub fn new(width: Width, height: Height) -> Result<TileGrid, GridCreationError> {
        if width.0 == 0 || height.0 == 0 {
            return Err(GridCreationError::InvalidDimensions);
        }

        Ok(TileGrid {
            tiles: vec![TileState::Blocked; width.0 * height.0],
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width.0 * self.height.0
    }

    /// The state of the tile at the given coordinate, None when the
    /// coordinate is outside the grid.
    #[inline]
    pub fn tile(&self, coord: Cartesian2DCoordinate) -> Option<TileState> {
        self.coordinate_to_index(coord).map(|index| self.tiles[index])
    }

    /// The state of the tile one step away in the given compass direction.
    ///
    /// This is the adjacency query the movement layer runs before stepping a
    /// player: `Passage` and `Exit` answers mean the step lands on a walkable
    /// tile. Queries from or to anywhere outside the grid answer
    /// `OutOfBounds` rather than failing.
    pub fn tile_towards(&self,
                        coord: Cartesian2DCoordinate,
                        direction: CompassPrimary)
                        -> TileState {
        offset_coordinate(coord, direction)
            .and_then(|neighbour_coord| self.tile(neighbour_coord))
            .unwrap_or(TileState::OutOfBounds)
    }

    /// Overwrite the state of one tile. Returns false without touching the
    /// grid when the coordinate is out of bounds or the state is the
    /// `OutOfBounds` sentinel, which is not storable.
    pub fn set_tile(&mut self, coord: Cartesian2DCoordinate, state: TileState) -> bool {
        if state == TileState::OutOfBounds {
            return false;
        }
        if let Some(index) = self.coordinate_to_index(coord) {
            self.tiles[index] = state;
            true
        } else {
            false
        }
    }

    /// Tiles to the North, South, East or West of a particular tile that are
    /// within the grid.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        [CompassPrimary::North, CompassPrimary::South, CompassPrimary::East, CompassPrimary::West]
            .iter()
            .filter_map(|&dir| offset_coordinate(coord, dir))
            .filter(|&adjacent_coord| self.is_valid_coordinate(adjacent_coord))
            .collect()
    }

    /// The coordinate of the grid's goal tile, None until a generator has
    /// placed one.
    pub fn exit_position(&self) -> Option<Cartesian2DCoordinate> {
        self.iter().find(|&coord| self.tile(coord) == Some(TileState::Exit))
    }

    /// Number of tiles a player could stand on (`Passage` plus `Exit`).
    pub fn walkable_count(&self) -> usize {
        self.tiles.iter().filter(|state| state.is_walkable()).count()
    }

    /// Is the coordinate within the grid's dimensions?
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_length: self.width,
            cells_count: self.size(),
        }
    }

    pub fn iter_row(&self) -> RowIter {
        RowIter {
            current_row: 0,
            width: self.width.0,
            height: self.height.0,
        }
    }

    #[inline]
    fn coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const BLOCKED_GLYPH: char = '█';
        const PASSAGE_GLYPH: char = ' ';
        const EXIT_GLYPH: char = 'E';

        let rendered = self.iter_row()
            .map(|row| {
                row.into_iter()
                    .map(|coord| match self.tile(coord) {
                        Some(TileState::Passage) => PASSAGE_GLYPH,
                        Some(TileState::Exit) => EXIT_GLYPH,
                        _ => BLOCKED_GLYPH,
                    })
                    .collect::<String>()
            })
            .join("\n");

        write!(f, "{}", rendered)
    }
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "TileGrid :: width: {:?}, height: {:?}, walkable: {:?}",
               self.width,
               self.height,
               self.walkable_count())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_length: Width,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    self.row_length);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()

// Converting the grid into an iterator (CellIter - the default most sensible)
impl<'a> IntoIterator for &'a TileGrid {
    type Item = Cartesian2DCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    width: usize,
    height: usize,
}
impl Iterator for RowIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.height {
            let coords = (0..self.width)
                .map(|i| Cartesian2DCoordinate::new(i as u32, self.current_row as u32))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.height - self.current_row;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools; // a trait

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn small_grid() -> TileGrid {
        TileGrid::new(Width(3), Height(3)).expect("valid dimensions")
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(TileGrid::new(Width(0), Height(5)).unwrap_err(),
                   GridCreationError::InvalidDimensions);
        assert_eq!(TileGrid::new(Width(5), Height(0)).unwrap_err(),
                   GridCreationError::InvalidDimensions);
        assert_eq!(TileGrid::new(Width(0), Height(0)).unwrap_err(),
                   GridCreationError::InvalidDimensions);
    }

    #[test]
    fn new_grids_are_fully_blocked() {
        let g = small_grid();
        assert!(g.iter().all(|coord| g.tile(coord) == Some(TileState::Blocked)));
        assert_eq!(g.walkable_count(), 0);
        assert_eq!(g.exit_position(), None);
    }

    #[test]
    fn tile_lookup_out_of_the_grid_is_none() {
        let g = small_grid();
        assert_eq!(g.tile(gc(3, 0)), None);
        assert_eq!(g.tile(gc(0, 3)), None);
        assert_eq!(g.tile(gc(100, 100)), None);
    }

    #[test]
    fn setting_tiles() {
        let mut g = small_grid();
        assert!(g.set_tile(gc(1, 2), TileState::Passage));
        assert_eq!(g.tile(gc(1, 2)), Some(TileState::Passage));

        assert!(g.set_tile(gc(2, 2), TileState::Exit));
        assert_eq!(g.exit_position(), Some(gc(2, 2)));
        assert_eq!(g.walkable_count(), 2);
    }

    #[test]
    fn setting_tiles_out_of_the_grid_is_refused() {
        let mut g = small_grid();
        assert!(!g.set_tile(gc(3, 3), TileState::Passage));
        assert_eq!(g.walkable_count(), 0);
    }

    #[test]
    fn the_out_of_bounds_sentinel_is_not_storable() {
        let mut g = small_grid();
        assert!(!g.set_tile(gc(0, 0), TileState::OutOfBounds));
        assert_eq!(g.tile(gc(0, 0)), Some(TileState::Blocked));
    }

    #[test]
    fn adjacency_queries_read_the_neighbouring_tile() {
        let mut g = small_grid();
        g.set_tile(gc(1, 0), TileState::Passage);
        g.set_tile(gc(1, 2), TileState::Exit);
        g.set_tile(gc(0, 1), TileState::Passage);

        let centre = gc(1, 1);
        assert_eq!(g.tile_towards(centre, CompassPrimary::North), TileState::Passage);
        assert_eq!(g.tile_towards(centre, CompassPrimary::South), TileState::Exit);
        assert_eq!(g.tile_towards(centre, CompassPrimary::East), TileState::Blocked);
        assert_eq!(g.tile_towards(centre, CompassPrimary::West), TileState::Passage);
    }

    #[test]
    fn adjacency_queries_over_the_grid_edge_are_out_of_bounds() {
        let g = small_grid();
        assert_eq!(g.tile_towards(gc(0, 0), CompassPrimary::North), TileState::OutOfBounds);
        assert_eq!(g.tile_towards(gc(0, 0), CompassPrimary::West), TileState::OutOfBounds);
        assert_eq!(g.tile_towards(gc(2, 2), CompassPrimary::South), TileState::OutOfBounds);
        assert_eq!(g.tile_towards(gc(2, 2), CompassPrimary::East), TileState::OutOfBounds);

        // A query from a coordinate nowhere near the grid is just as safe.
        assert_eq!(g.tile_towards(gc(50, 50), CompassPrimary::North), TileState::OutOfBounds);
    }

    #[test]
    fn adjacency_queries_do_not_mutate_the_grid() {
        let mut g = small_grid();
        g.set_tile(gc(0, 0), TileState::Passage);
        g.set_tile(gc(2, 2), TileState::Exit);
        let before: Vec<_> = g.iter().map(|coord| g.tile(coord)).collect();

        for coord in g.iter() {
            for &dir in &[CompassPrimary::North, CompassPrimary::South,
                          CompassPrimary::East, CompassPrimary::West] {
                let _ = g.tile_towards(coord, dir);
            }
        }

        let after: Vec<_> = g.iter().map(|coord| g.tile(coord)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn neighbour_tiles() {
        let g = small_grid();

        let check_expected_neighbours = |coord, expected_neighbours: &[Cartesian2DCoordinate]| {
            let neighbours: Vec<Cartesian2DCoordinate> = g.neighbours(coord).iter().cloned().sorted();
            let expected: Vec<Cartesian2DCoordinate> = expected_neighbours.iter().cloned().sorted();
            assert_eq!(neighbours, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(2, 0), &[gc(1, 0), gc(2, 1)]);
        check_expected_neighbours(gc(0, 2), &[gc(0, 1), gc(1, 2)]);
        check_expected_neighbours(gc(2, 2), &[gc(2, 1), gc(1, 2)]);

        // side
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(2, 0), gc(1, 1)]);

        // interior
        check_expected_neighbours(gc(1, 1), &[gc(1, 0), gc(0, 1), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn cell_iter_visits_row_major() {
        let g = TileGrid::new(Width(2), Height(2)).unwrap();
        assert_eq!(g.iter().collect::<Vec<Cartesian2DCoordinate>>(),
                   &[gc(0, 0), gc(1, 0), gc(0, 1), gc(1, 1)]);
        assert_eq!(g.iter().len(), 4);
    }

    #[test]
    fn row_iter_visits_whole_rows() {
        let g = TileGrid::new(Width(2), Height(2)).unwrap();
        assert_eq!(g.iter_row().collect::<Vec<Vec<Cartesian2DCoordinate>>>(),
                   &[&[gc(0, 0), gc(1, 0)], &[gc(0, 1), gc(1, 1)]]);
    }

    #[test]
    fn display_renders_one_glyph_per_tile() {
        let mut g = small_grid();
        g.set_tile(gc(0, 0), TileState::Passage);
        g.set_tile(gc(1, 0), TileState::Passage);
        g.set_tile(gc(2, 2), TileState::Exit);

        let text = format!("{}", g);
        assert_eq!(text, "  █\n███\n██E");
    }
}
