use crate::grid::TileGrid;
use crate::tiles::{offset_coordinate, Cartesian2DCoordinate, CompassPrimary, TileState};
use crate::units::CellPixels;

/// A tile entity that steps around the grid, one tile at a time - the player.
///
/// Holds the logical grid coordinate plus the fixed per axis pixel scale a
/// renderer uses to place the entity's sprite.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MovableTile {
    position: Cartesian2DCoordinate,
    scale_x: CellPixels,
    scale_y: CellPixels,
}

impl MovableTile {
    pub fn new(position: Cartesian2DCoordinate,
               scale_x: CellPixels,
               scale_y: CellPixels)
               -> MovableTile {
        MovableTile {
            position,
            scale_x,
            scale_y,
        }
    }

    #[inline]
    pub fn logical_position(&self) -> Cartesian2DCoordinate {
        self.position
    }

    /// Top left pixel of the tile: the logical coordinate scaled per axis.
    #[inline]
    pub fn pixel_position(&self) -> (u32, u32) {
        (self.position.x * self.scale_x.0, self.position.y * self.scale_y.0)
    }

    /// Step one tile in the given direction.
    ///
    /// A step off the addressable coordinate space is ignored. Legality
    /// against a maze is `step_towards`' business, not this type's.
    pub fn move_towards(&mut self, direction: CompassPrimary) {
        if let Some(next) = offset_coordinate(self.position, direction) {
            self.position = next;
        }
    }
}

/// What came of asking to move one tile in some direction.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveOutcome {
    /// The neighbouring tile was an open passage and the mover stepped onto it.
    Moved,
    /// The neighbouring tile was the exit: the maze is solved. The mover
    /// stays on its tile.
    Won,
    /// A wall or the grid edge: the mover stays put.
    Rejected,
}

/// Apply the maze's movement rules to one requested step.
///
/// The adjacency query decides: `Passage` allows the move, `Exit` wins the
/// game, `Blocked` and `OutOfBounds` leave the mover where it was.
pub fn step_towards(grid: &TileGrid,
                    mover: &mut MovableTile,
                    direction: CompassPrimary)
                    -> MoveOutcome {
    match grid.tile_towards(mover.logical_position(), direction) {
        TileState::Passage => {
            mover.move_towards(direction);
            MoveOutcome::Moved
        }
        TileState::Exit => MoveOutcome::Won,
        TileState::Blocked | TileState::OutOfBounds => MoveOutcome::Rejected,
    }
}
