use docopt::Docopt;
use rand::Rng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    path::Path
};

use tilemaze::{
    generators::{self, MazeSeed},
    renderers::{self, RenderOptions},
    tiles::Cartesian2DCoordinate,
    units::{CellPixels, Height, Width},
};

const USAGE: &str = "Tilemaze

Usage:
    tilemaze_driver -h | --help
    tilemaze_driver [--grid-width=<w> --grid-height=<h>] [--seed=<n>] [--text-out=<path>] [image --image-out=<path> --cell-pixels=<n> --mark-start]

Options:
    -h --help            Show this screen.
    --grid-width=<w>     The grid width in tiles [default: 21].
    --grid-height=<h>    The grid height in tiles [default: 21].
    --seed=<n>           Seed word for a reproducible maze layout. A random seed is drawn when absent.
    --text-out=<path>    Output file path for the textual rendering of the maze, instead of stdout.
    --image-out=<path>   Output file path for a picture rendering of the maze. Always PNG format [default: maze.png].
    --cell-pixels=<n>    Pixel count to render one tile in the picture [default: 10] max 255.
    --mark-start         Paint the player start tile into the picture rendering.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u32>,
    flag_text_out: String,
    cmd_image: bool,
    flag_image_out: String,
    flag_cell_pixels: u8,
    flag_mark_start: bool,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            GridCreation(::tilemaze::grid::GridCreationError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let seed: MazeSeed = match args.flag_seed {
        Some(word) => generators::spread_seed_word(word),
        None => {
            let mut entropy = rand::thread_rng();
            [entropy.gen(), entropy.gen(), entropy.gen(), entropy.gen()]
        }
    };

    let maze = generators::generate(Width(args.flag_grid_width),
                                    Height(args.flag_grid_height),
                                    seed)?;

    if args.flag_text_out.is_empty() {
        println!("{}", maze);
    } else {
        write_text_to_file(&format!("{}", maze), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if args.cmd_image {
        let render_options = RenderOptions {
            cell_pixels: CellPixels(u32::from(args.flag_cell_pixels)),
            player: if args.flag_mark_start {
                Some(Cartesian2DCoordinate::new(0, 0))
            } else {
                None
            },
        };
        renderers::save_image(&maze, &render_options, Path::new(&args.flag_image_out))
            .chain_err(|| format!("Failed to write maze image to {}", args.flag_image_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
