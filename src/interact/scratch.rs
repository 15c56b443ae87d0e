//! Threshold-reveal scratch surface
//!
//! A covered mask sitting over hidden content. Pointer strokes stamp out
//! circles of cover; once a stride-sampled coverage check crosses the reveal
//! threshold the surface flips to revealed, the rest of the mask is cleared,
//! and every further mutation is a no-op. The input layer is responsible for
//! sampling a continuous stroke finely enough that stamps overlap.

use glam::Vec2;
use serde::Serialize;
use thiserror::Error;

use crate::consts::{REVEAL_THRESHOLD, SAMPLE_STRIDE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("scratch surface must have nonzero area, got {width}x{height}")]
    ZeroArea { width: u32, height: u32 },
}

/// Masked overlay tracking how much cover has been scratched away
///
/// One mask cell per logical pixel; `true` means cleared. `revealed` is
/// monotonic: false to true exactly once, never back.
#[derive(Debug, Clone, Serialize)]
pub struct ScratchSurface {
    width: u32,
    height: u32,
    mask: Vec<bool>,
    revealed: bool,
}

impl ScratchSurface {
    /// Fully covered surface. Zero-area dimensions fail fast.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::ZeroArea { width, height });
        }
        Ok(Self {
            width,
            height,
            mask: vec![false; (width * height) as usize],
            revealed: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the cell at (x, y) has been cleared
    pub fn is_cleared(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.mask[(y * self.width + x) as usize]
    }

    /// Clear every cell within `radius` of `point` (surface coordinates,
    /// origin top-left). No-op once revealed; stamps partly off the surface
    /// clear only the overlapping portion.
    pub fn apply_stroke(&mut self, point: Vec2, radius: f32) {
        if self.revealed || radius <= 0.0 {
            return;
        }

        let x0 = (point.x - radius).floor().max(0.0) as u32;
        let y0 = (point.y - radius).floor().max(0.0) as u32;
        let x1 = ((point.x + radius).ceil() as i64).clamp(0, self.width as i64) as u32;
        let y1 = ((point.y + radius).ceil() as i64).clamp(0, self.height as i64) as u32;

        let r2 = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if center.distance_squared(point) <= r2 {
                    self.mask[(y * self.width + x) as usize] = true;
                }
            }
        }
    }

    /// Fraction of sampled cells that are cleared
    ///
    /// Samples the mask row-major at a fixed stride to bound the cost on
    /// large surfaces; uniform across the rectangle, and always at least one
    /// sample for any constructible surface.
    pub fn coverage(&self) -> f32 {
        let mut cleared = 0usize;
        let mut total = 0usize;
        for i in (0..self.mask.len()).step_by(SAMPLE_STRIDE) {
            total += 1;
            if self.mask[i] {
                cleared += 1;
            }
        }
        cleared as f32 / total as f32
    }

    /// Check the coverage threshold; past it, flip to revealed and clear the
    /// remaining cover. Returns the (possibly new) revealed state. Terminal:
    /// once revealed, this and `apply_stroke` change nothing.
    pub fn evaluate_reveal(&mut self) -> bool {
        if self.revealed {
            return true;
        }
        if self.coverage() > REVEAL_THRESHOLD {
            self.revealed = true;
            self.mask.fill(true);
            log::debug!("scratch surface {}x{} revealed", self.width, self.height);
        }
        self.revealed
    }
}
