//! Evasive target controller
//!
//! The runaway "NO" button: every time the pointer gets close (hover enter or
//! touch start), the target jumps to a fresh random spot that stays on
//! screen and clear of the center zone where the fixed YES button lives.
//! Positions are offsets from the anchor (viewport center); animating the
//! jump is the renderer's problem, this only picks the destination.

use glam::Vec2;
use serde::Serialize;

use super::RandomSource;
use crate::clamp_lenient;
use crate::consts::*;

/// Labels shown after the first evasion, drawn uniformly at random
pub const NO_PHRASES: &[&str] = &[
    "No",
    "Nope",
    "Nice try",
    "Almost!",
    "Too slow",
    "We talked about this",
    "Seriously?",
    "Don't do it",
    "Think again",
    "Just click YES",
    "Whoops!",
    "Cant touch this",
    "Nuh-uh",
    "Not happening",
    "Oop!",
    "Missed me",
    "Why tho?",
];

/// Canonical label before and on the first evasion
pub const CANONICAL_NO: &str = "No";

/// Logical viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_W,
            height: DEFAULT_VIEWPORT_H,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Narrow viewports get the compact layout and the smaller center zone
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_BREAKPOINT
    }

    /// Half-width of the center exclusion square for this viewport
    pub fn center_zone(&self) -> f32 {
        if self.is_compact() { CENTER_ZONE_COMPACT } else { CENTER_ZONE }
    }
}

/// Rectangle of valid target offsets: keeps the whole target on screen with
/// `EDGE_PADDING` to spare.
#[derive(Debug, Clone, Copy)]
struct SafeRect {
    min: Vec2,
    max: Vec2,
}

impl SafeRect {
    fn for_viewport(vp: Viewport) -> Self {
        let half = Vec2::new(vp.width, vp.height) * 0.5;
        let margin = Vec2::new(
            EDGE_PADDING + TARGET_WIDTH * 0.5,
            EDGE_PADDING + TARGET_HEIGHT * 0.5,
        );
        Self {
            min: -half + margin,
            max: half - margin,
        }
    }

    fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp_lenient(p.x, self.min.x, self.max.x),
            clamp_lenient(p.y, self.min.y, self.max.y),
        )
    }
}

/// Push a coordinate outward past the exclusion zone, preserving its sign.
/// Zero is treated as positive so the kick always moves somewhere.
#[inline]
fn kick_out(v: f32, zone: f32) -> f32 {
    let sign = if v < 0.0 { -1.0 } else { 1.0 };
    sign * (v.abs() + zone)
}

/// State of the runaway button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvasiveTarget {
    /// Offset from the anchor (viewport center), logical pixels
    pub position: Vec2,
    /// Currently displayed text
    pub label: &'static str,
    /// Cosmetic tilt, degrees
    pub tilt_deg: f32,
    /// Successful evasions so far
    pub attempts: u32,
}

impl EvasiveTarget {
    /// Starting state: parked cheekily next to the anchor, right of it on
    /// wide screens, below it on compact ones. Independent of attempts.
    pub fn new(_viewport: Viewport, compact: bool) -> Self {
        let position = if compact {
            Vec2::new(0.0, 120.0)
        } else {
            Vec2::new(160.0, 0.0)
        };
        Self {
            position,
            label: CANONICAL_NO,
            tilt_deg: 0.0,
            attempts: 0,
        }
    }

    /// React to the pointer closing in: jump to a fresh random offset and
    /// maybe swap the label. Safe to call as fast as events arrive.
    ///
    /// A missing viewport falls back to the default assumed size.
    pub fn on_approach(&mut self, viewport: Option<Viewport>, rng: &mut impl RandomSource) {
        let vp = viewport.unwrap_or_default();
        let rect = SafeRect::for_viewport(vp);

        let mut p = Vec2::new(
            rng.range_f32(rect.min.x, rect.max.x),
            rng.range_f32(rect.min.y, rect.max.y),
        );

        // Keep clear of the YES button: if the draw landed in the center
        // zone, kick the larger-magnitude axis outward (ties go to x).
        let zone = vp.center_zone();
        if p.x.abs() < zone && p.y.abs() < zone {
            if p.x.abs() >= p.y.abs() {
                p.x = kick_out(p.x, zone);
            } else {
                p.y = kick_out(p.y, zone);
            }
        }

        // Clamp after the kick; the post-kick point must never leave the
        // viewport even if that re-enters the zone edge on tiny screens.
        p = rect.clamp(p);

        self.label = if self.attempts < 1 {
            CANONICAL_NO
        } else {
            NO_PHRASES[rng.pick(NO_PHRASES.len())]
        };
        self.tilt_deg = rng.range_f32(-MAX_TILT_DEG, MAX_TILT_DEG);
        self.attempts += 1;
        self.position = p;

        log::debug!(
            "evaded to ({:.1}, {:.1}) \"{}\" after {} attempts",
            p.x,
            p.y,
            self.label,
            self.attempts
        );
    }
}
