use rand::{Rng, SeedableRng, XorShiftRng};
use smallvec::SmallVec;

use crate::grid::{GridCreationError, TileGrid};
use crate::tiles::{offset_coordinate, Cartesian2DCoordinate, CompassPrimary, TileState};
use crate::units::{Height, Width};
use crate::utils::{fnv_hashset, FnvHashSet};

/// Seed for the generator's xorshift random number generator. The same seed
/// and dimensions always reproduce the same maze.
pub type MazeSeed = [u32; 4];

const DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                         CompassPrimary::South,
                                         CompassPrimary::East,
                                         CompassPrimary::West];

// The xorshift generator cannot accept an all zero seed, so that one input is
// remapped to rand's published default state words.
const ZERO_SEED_SUBSTITUTE: MazeSeed = [0x193a_6754, 0xa8a7_d469, 0x9783_5e91, 0x113b_a7bb];

/// Generate a complete maze: build a fully `Blocked` grid of the given
/// dimensions and run `frontier_growth` over it with a generator made from
/// `seed`.
pub fn generate(width: Width, height: Height, seed: MazeSeed) -> Result<TileGrid, GridCreationError> {
    let mut grid = TileGrid::new(width, height)?;
    let mut rng = rng_from_seed(seed);
    frontier_growth(&mut grid, &mut rng);
    Ok(grid)
}

/// The random number generator `generate` uses for a given seed.
pub fn rng_from_seed(seed: MazeSeed) -> XorShiftRng {
    if seed == [0, 0, 0, 0] {
        XorShiftRng::from_seed(ZERO_SEED_SUBSTITUTE)
    } else {
        XorShiftRng::from_seed(seed)
    }
}

/// Spread one seed word over a full `MazeSeed`.
///
/// XORs the word over the substitute state words, which differ pairwise, so
/// the result is never all zero. Convenient for command line flags that take
/// a single number.
pub fn spread_seed_word(word: u32) -> MazeSeed {
    [ZERO_SEED_SUBSTITUTE[0] ^ word,
     ZERO_SEED_SUBSTITUTE[1] ^ word,
     ZERO_SEED_SUBSTITUTE[2] ^ word,
     ZERO_SEED_SUBSTITUTE[3] ^ word]
}

/// Apply the frontier growth maze generation algorithm to a grid.
///
/// Rooms live two steps apart on each axis so that one wall tile separates
/// any two of them. The tile at (0, 0) is opened as the root, then the maze
/// grows by repeatedly opening a uniformly random frontier tile (a `Blocked`
/// tile two steps from some open room) and carving the single wall tile
/// between it and one randomly chosen room it already borders. Each new room
/// therefore joins the maze through exactly one wall, so every pair of open
/// tiles ends up connected by exactly one path - a perfect maze.
///
/// The last room opened is overwritten to `Exit` and becomes the goal. That
/// is whichever frontier tile happened to be processed last, not the room
/// furthest from the root. On a grid too small for the two step pattern to
/// grow at all (both dimensions under three) the root itself becomes the
/// exit.
pub fn frontier_growth(grid: &mut TileGrid, rng: &mut XorShiftRng) {
    let origin = Cartesian2DCoordinate::new(0, 0);
    grid.set_tile(origin, TileState::Passage);

    let mut frontier = FrontierSet::with_capacity(grid.size());
    for &cell in blocked_two_step_neighbours(grid, origin).iter() {
        frontier.insert(cell);
    }

    let mut last_opened = origin;
    while let Some((index, cell)) = frontier.pick(rng) {
        grid.set_tile(cell, TileState::Passage);
        carve_to_random_passage(grid, cell, rng);

        for &neighbour in blocked_two_step_neighbours(grid, cell).iter() {
            frontier.insert(neighbour);
        }
        frontier.remove_at(index);
        last_opened = cell;
    }

    grid.set_tile(last_opened, TileState::Exit);
}

/// Open the wall tile between a just opened room and one of the rooms it
/// borders, chosen uniformly at random. A frontier tile always borders at
/// least the room that put it on the frontier, but can border several when
/// separate arms of the maze have grown around it.
fn carve_to_random_passage(grid: &mut TileGrid, cell: Cartesian2DCoordinate, rng: &mut XorShiftRng) {
    let passage_directions = passage_two_step_directions(grid, cell);
    if passage_directions.is_empty() {
        return;
    }

    let direction = passage_directions[rng.gen::<usize>() % passage_directions.len()];
    if let Some(wall) = offset_coordinate(cell, direction) {
        grid.set_tile(wall, TileState::Passage);
    }
}

/// The in-grid tile two steps away in the given direction, skipping over the
/// intermediate wall tile.
fn two_step_neighbour(grid: &TileGrid,
                      from: Cartesian2DCoordinate,
                      direction: CompassPrimary)
                      -> Option<Cartesian2DCoordinate> {
    offset_coordinate(from, direction)
        .and_then(|step| offset_coordinate(step, direction))
        .filter(|&coord| grid.is_valid_coordinate(coord))
}

fn blocked_two_step_neighbours(grid: &TileGrid,
                               from: Cartesian2DCoordinate)
                               -> SmallVec<[Cartesian2DCoordinate; 4]> {
    DIRECTIONS.iter()
        .filter_map(|&dir| two_step_neighbour(grid, from, dir))
        .filter(|&coord| grid.tile(coord) == Some(TileState::Blocked))
        .collect()
}

fn passage_two_step_directions(grid: &TileGrid,
                               from: Cartesian2DCoordinate)
                               -> SmallVec<[CompassPrimary; 4]> {
    DIRECTIONS.iter()
        .cloned()
        .filter(|&dir| {
            two_step_neighbour(grid, from, dir)
                .and_then(|coord| grid.tile(coord))
                .map_or(false, |state| state == TileState::Passage)
        })
        .collect()
}

/// Candidate tiles for the next growth step.
///
/// Insertion ordered so a uniform random member can be picked by index in
/// O(1); an FNV set alongside rejects duplicate insertions. A bare hash set
/// would need an O(n) walk to reach its nth member every iteration.
struct FrontierSet {
    cells: Vec<Cartesian2DCoordinate>,
    membership: FnvHashSet<Cartesian2DCoordinate>,
}

impl FrontierSet {
    fn with_capacity(capacity: usize) -> FrontierSet {
        FrontierSet {
            cells: Vec::with_capacity(capacity),
            membership: fnv_hashset(capacity),
        }
    }

    fn insert(&mut self, cell: Cartesian2DCoordinate) {
        if self.membership.insert(cell) {
            self.cells.push(cell);
        }
    }

    fn pick(&self, rng: &mut XorShiftRng) -> Option<(usize, Cartesian2DCoordinate)> {
        if self.cells.is_empty() {
            None
        } else {
            let index = rng.gen::<usize>() % self.cells.len();
            Some((index, self.cells[index]))
        }
    }

    // Valid for the index `pick` returned this iteration: inserts only ever
    // append, so the picked index still names the same cell.
    fn remove_at(&mut self, index: usize) {
        let cell = self.cells.swap_remove(index);
        self.membership.remove(&cell);
    }
}
