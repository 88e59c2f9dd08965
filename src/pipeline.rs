//! End-to-end conversion: SGF file in, GIF file out.
//!
//! The whole animation is built and encoded in memory before the output
//! path is touched, so a failed run leaves no partial file behind.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::Error;
use crate::animation::{Animation, AnimationStats, encode_animation};
use crate::record::{GameTree, Move, extract_moves, first_game, record_board_size, sgf};
use crate::render::Rasterizer;
use crate::schema::{OutOfRangePolicy, RenderConfig};

/// Read `path` and build the animation of its first game.
pub fn sgf_to_animation<P: AsRef<Path>>(path: P, config: &RenderConfig) -> Result<Animation, Error> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let collection = sgf::parse_bytes(&bytes)?;
    game_to_animation(first_game(&collection)?, config)
}

/// Build the animation of a single parsed game.
pub fn game_to_animation(game: &GameTree, config: &RenderConfig) -> Result<Animation, Error> {
    let config = resolve_config(game, config)?;
    let moves = check_bounds(extract_moves(game)?, &config)?;
    let frames = Rasterizer::new(&config).rasterize_all(&moves);
    Ok(Animation::assemble(frames, &config))
}

/// Apply the record's `SZ` (when enabled) and validate the result.
pub fn resolve_config(game: &GameTree, base: &RenderConfig) -> Result<RenderConfig, Error> {
    let config = if base.use_record_size {
        match record_board_size(game)? {
            Some(size) if size != base.board_size => {
                info!("using board size {size} from the record");
                base.with_board_size(size)
            }
            _ => base.clone(),
        }
    } else {
        base.clone()
    };
    config.validate()?;
    Ok(config)
}

/// Enforce the out-of-range policy on decoded moves.
pub fn check_bounds(moves: Vec<Move>, config: &RenderConfig) -> Result<Vec<Move>, Error> {
    let board_size = config.board_size;
    let mut kept = Vec::with_capacity(moves.len());
    for (i, mv) in moves.into_iter().enumerate() {
        if mv.is_on_board(board_size) {
            kept.push(mv);
            continue;
        }
        match config.out_of_range {
            OutOfRangePolicy::Reject => {
                return Err(Error::MoveOutOfBounds {
                    number: i + 1,
                    x: mv.x,
                    y: mv.y,
                    board_size,
                });
            }
            OutOfRangePolicy::Skip => warn!(
                "skipping move {} at ({}, {}): outside the {}x{} board",
                i + 1,
                mv.x,
                mv.y,
                board_size,
                board_size
            ),
        }
    }
    Ok(kept)
}

/// Encode `animation` and write it to `path`.
pub fn save<P: AsRef<Path>>(path: P, animation: &Animation) -> Result<AnimationStats, Error> {
    let path = path.as_ref();
    let bytes = encode_animation(animation)?;
    fs::write(path, &bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(AnimationStats::new(animation, bytes.len() as u64))
}

/// Convert the SGF file at `input` into a GIF at `output`.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &RenderConfig,
) -> Result<AnimationStats, Error> {
    let animation = sgf_to_animation(input, config)?;
    save(output, &animation)
}
