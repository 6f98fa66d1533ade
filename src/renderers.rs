use image::{ImageBuffer, Rgb, RgbImage};
use std::cmp;
use std::io;
use std::path::Path;

use crate::grid::TileGrid;
use crate::tiles::{Cartesian2DCoordinate, TileState};
use crate::units::CellPixels;

const WALL_COLOUR: Rgb<u8> = Rgb { data: [0x1e, 0x25, 0x2e] };
const PASSAGE_COLOUR: Rgb<u8> = Rgb { data: [0xef, 0xe9, 0xdc] };
const EXIT_COLOUR: Rgb<u8> = Rgb { data: [0x2f, 0xa0, 0x4e] };
const PLAYER_COLOUR: Rgb<u8> = Rgb { data: [0xc0, 0x3b, 0x2a] };

#[derive(Debug, Copy, Clone)]
pub struct RenderOptions {
    /// Side length in pixels of the square drawn for one tile.
    pub cell_pixels: CellPixels,
    /// Tile to paint with the player marker colour, usually the start.
    pub player: Option<Cartesian2DCoordinate>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            cell_pixels: CellPixels(10),
            player: None,
        }
    }
}

/// Draw the grid as an RGB image, one coloured square per tile.
pub fn render_image(grid: &TileGrid, options: &RenderOptions) -> RgbImage {
    let cell_pixels = cmp::max(1, options.cell_pixels.0);
    let image_width = grid.width().0 as u32 * cell_pixels;
    let image_height = grid.height().0 as u32 * cell_pixels;
    let mut image = ImageBuffer::new(image_width, image_height);

    for coord in grid.iter() {
        let colour = if options.player == Some(coord) {
            PLAYER_COLOUR
        } else {
            match grid.tile(coord) {
                Some(TileState::Passage) => PASSAGE_COLOUR,
                Some(TileState::Exit) => EXIT_COLOUR,
                _ => WALL_COLOUR,
            }
        };

        let left = coord.x * cell_pixels;
        let top = coord.y * cell_pixels;
        for pixel_x in left..(left + cell_pixels) {
            for pixel_y in top..(top + cell_pixels) {
                image.put_pixel(pixel_x, pixel_y, colour);
            }
        }
    }

    image
}

/// Render the grid and write it out, the format chosen by the file extension
/// (use `.png` for the usual snapshot).
pub fn save_image(grid: &TileGrid, options: &RenderOptions, file_path: &Path) -> io::Result<()> {
    render_image(grid, options).save(file_path)
}
