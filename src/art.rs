//! Art driver: channel trees, per-pixel evaluation, persistence.

use std::path::Path;

use anyhow::{Context, Result};

use crate::builder::build_random_function;
use crate::expr::Expr;
use crate::remap::{color_map, remap};
use crate::rng::SeededRng;
use crate::surface::{PixelSurface, Surface};

/// Depth range used for every channel tree.
pub const CHANNEL_MIN_DEPTH: u32 = 7;
pub const CHANNEL_MAX_DEPTH: u32 = 9;

/// One independently generated expression tree per color channel.
/// Built once per image, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ChannelTrees {
    pub red: Expr,
    pub green: Expr,
    pub blue: Expr,
}

impl ChannelTrees {
    /// Draw three independent trees from the generator at the standard
    /// channel depth range.
    pub fn draw(rng: &mut SeededRng) -> Result<Self> {
        Ok(Self {
            red: build_random_function(rng, CHANNEL_MIN_DEPTH, CHANNEL_MAX_DEPTH)?,
            green: build_random_function(rng, CHANNEL_MIN_DEPTH, CHANNEL_MAX_DEPTH)?,
            blue: build_random_function(rng, CHANNEL_MIN_DEPTH, CHANNEL_MAX_DEPTH)?,
        })
    }
}

/// Paint every pixel of `surface` by evaluating the channel trees over the
/// `[-1, 1]` square. Each coordinate is visited exactly once.
pub fn render_into<S: Surface>(trees: &ChannelTrees, surface: &mut S) -> Result<()> {
    let width = f64::from(surface.width());
    let height = f64::from(surface.height());

    for i in 0..surface.width() {
        let x = remap(f64::from(i), 0.0, width, -1.0, 1.0)?;
        for j in 0..surface.height() {
            let y = remap(f64::from(j), 0.0, height, -1.0, 1.0)?;
            surface.set_pixel(
                i,
                j,
                color_map(trees.red.evaluate(x, y)),
                color_map(trees.green.evaluate(x, y)),
                color_map(trees.blue.evaluate(x, y)),
            );
        }
    }
    Ok(())
}

/// Generate one piece of art and persist it as PNG at `path`.
pub fn generate_art(rng: &mut SeededRng, width: u32, height: u32, path: &Path) -> Result<()> {
    let trees = ChannelTrees::draw(rng)?;
    let mut surface = PixelSurface::new(width, height)
        .with_context(|| format!("cannot allocate {width}x{height} surface"))?;
    render_into(&trees, &mut surface)?;
    surface.save(path)
}

/// Fill a surface with uniform random RGB noise and persist it.
///
/// Exercises the coordinate loop and the PNG path without any expression
/// trees; useful as an encoder smoke check.
pub fn generate_noise(rng: &mut SeededRng, width: u32, height: u32, path: &Path) -> Result<()> {
    let mut surface = PixelSurface::new(width, height)
        .with_context(|| format!("cannot allocate {width}x{height} surface"))?;
    for i in 0..width {
        for j in 0..height {
            let (r, g, b) = (rng.next_byte(), rng.next_byte(), rng.next_byte());
            surface.set_pixel(i, j, r, g, b);
        }
    }
    surface.save(path)
}

#[cfg(test)]
mod tests {
    use super::{render_into, ChannelTrees};
    use crate::rng::SeededRng;
    use crate::surface::Surface;
    use std::collections::HashSet;

    /// Records every write instead of storing pixels.
    struct RecordingSurface {
        width: u32,
        height: u32,
        writes: Vec<(u32, u32)>,
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn set_pixel(&mut self, i: u32, j: u32, _r: u8, _g: u8, _b: u8) {
            self.writes.push((i, j));
        }
    }

    #[test]
    fn render_visits_every_coordinate_exactly_once() {
        let mut rng = SeededRng::from_seed(31337);
        let trees = ChannelTrees::draw(&mut rng).expect("trees should draw");

        let mut surface = RecordingSurface {
            width: 13,
            height: 7,
            writes: Vec::new(),
        };
        render_into(&trees, &mut surface).expect("render should succeed");

        assert_eq!(surface.writes.len(), 13 * 7);
        let unique: HashSet<_> = surface.writes.iter().copied().collect();
        assert_eq!(unique.len(), 13 * 7, "no coordinate should repeat");
    }

    #[test]
    fn channel_trees_are_independent_draws() {
        let mut rng = SeededRng::from_seed(8);
        let trees = ChannelTrees::draw(&mut rng).expect("trees should draw");
        // Three consecutive draws at depth 7..=9 are overwhelmingly likely
        // to differ structurally; a collision here means the generator is
        // not advancing between channels.
        assert!(trees.red != trees.green || trees.green != trees.blue);
    }
}
