//! Party Post demo driver
//!
//! Runs a scripted pass through the whole invitation: envelope, a few
//! runaway-button evasions, a scratch-off reveal, and a printed ticket.
//! Pass a seed as the first argument for a reproducible run.

use glam::Vec2;

use party_post::consts::STROKE_RADIUS;
use party_post::flow::{DEVELOP_TICKS, INTRO_TICKS, OPENING_TICKS};
use party_post::{EvasiveTarget, Flow, PcgSource, ScratchSurface, Ticket, Viewport};

const DEFAULT_SEED: u64 = 0xF00D;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    log::info!("party-post demo, seed {seed}");

    let mut rng = PcgSource::seeded(seed);
    let mut flow = Flow::new();

    // Envelope: wait out the intro, tap it open, read the letter
    for _ in 0..INTRO_TICKS {
        flow.tick();
    }
    flow.open_envelope();
    for _ in 0..OPENING_TICKS {
        flow.tick();
    }
    flow.read_letter();

    // Landing: chase the NO button for a while, then give in
    let viewport = Viewport::default();
    let mut no_button = EvasiveTarget::new(viewport, viewport.is_compact());
    for _ in 0..5 {
        no_button.on_approach(Some(viewport), &mut rng);
        log::info!(
            "NO button fled to ({:.0}, {:.0}) saying \"{}\"",
            no_button.position.x,
            no_button.position.y,
            no_button.label
        );
    }
    flow.accept();

    // Personalize and wait for the Polaroid to develop
    if let Err(err) = flow.generate("Demo Guest") {
        log::error!("{err}");
        return;
    }
    for _ in 0..DEVELOP_TICKS {
        flow.tick();
    }

    // Scratch the card clean
    let mut card = ScratchSurface::new(320, 180).expect("nonzero demo surface");
    let mut y = 0.0;
    while y <= 180.0 {
        let mut x = 0.0;
        while x <= 320.0 {
            card.apply_stroke(Vec2::new(x, y), STROKE_RADIUS);
            x += 15.0;
        }
        y += 15.0;
    }
    log::info!("scratch card revealed: {}", card.evaluate_reveal());

    // Print the souvenir
    let ticket = Ticket::issue(flow.guest_name.clone(), &mut rng);
    let json = serde_json::to_string_pretty(&ticket).expect("ticket serializes");
    println!("{json}");
}
