//! Party Post - deterministic core of a playful event-invitation experience
//!
//! Core modules:
//! - `interact`: Pointer-driven state machines (evasive "NO" button, scratch-off reveal)
//! - `flow`: Invitation view flow (envelope, letter, landing, ticket steps)
//! - `ticket`: Souvenir ticket assembly (event details + randomized extras)
//!
//! Everything here is pure and renderer-free: state goes in, new state comes
//! out, and a rendering layer reads the result each frame. All randomness is
//! drawn through an injectable [`interact::RandomSource`].

pub mod flow;
pub mod interact;
pub mod ticket;

pub use flow::{EnvelopeStep, Flow, FlowError, TicketStep, View};
pub use interact::{EvasiveTarget, PcgSource, RandomSource, ScratchSurface, SurfaceError, Viewport};
pub use ticket::{EventDetails, Ticket};

/// Interaction tuning constants
pub mod consts {
    /// Assumed viewport when the caller cannot supply one
    pub const DEFAULT_VIEWPORT_W: f32 = 1024.0;
    pub const DEFAULT_VIEWPORT_H: f32 = 768.0;

    /// Viewports narrower than this are treated as compact/mobile
    pub const COMPACT_BREAKPOINT: f32 = 768.0;

    /// Safe distance from the screen edge for the evasive target
    pub const EDGE_PADDING: f32 = 40.0;
    /// Approximate rendered size of the evasive target
    pub const TARGET_WIDTH: f32 = 140.0;
    pub const TARGET_HEIGHT: f32 = 60.0;

    /// Half-width of the center exclusion square (keeps the runaway button
    /// clear of the fixed YES button at the anchor)
    pub const CENTER_ZONE: f32 = 140.0;
    pub const CENTER_ZONE_COMPACT: f32 = 80.0;

    /// Cosmetic tilt range for the evasive target, degrees
    pub const MAX_TILT_DEG: f32 = 10.0;

    /// Smallest viewports for which the exclusion invariant can hold after
    /// clamping (safe rectangle must extend past the zone on both axes)
    pub const MIN_VIEWPORT_W: f32 = 500.0;
    pub const MIN_VIEWPORT_H: f32 = 420.0;
    pub const MIN_VIEWPORT_W_COMPACT: f32 = 380.0;
    pub const MIN_VIEWPORT_H_COMPACT: f32 = 300.0;

    /// Canonical scratch stamp radius (logical pixels)
    pub const STROKE_RADIUS: f32 = 25.0;
    /// Mask sampling stride for coverage evaluation
    pub const SAMPLE_STRIDE: usize = 10;
    /// Sampled coverage above this flips the surface to revealed
    pub const REVEAL_THRESHOLD: f32 = 0.5;
}

/// Clamp `v` into `[lo, hi]`, collapsing to the midpoint when the span is
/// inverted (degenerate viewports smaller than the safety margins).
#[inline]
pub fn clamp_lenient(v: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi { (lo + hi) * 0.5 } else { v.clamp(lo, hi) }
}
