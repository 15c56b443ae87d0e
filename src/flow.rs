//! Invitation view flow
//!
//! The view state machine for the whole invitation: envelope intro, sealed
//! envelope, letter, the landing screen with the YES/NO pair, then ticket
//! personalization, developing, and the finished ticket. Timed transitions
//! are modeled as tick countdowns at a fixed rate so the flow stays
//! deterministic and testable without a clock.
//!
//! Events that make no sense in the current view are ignored; the only
//! rejected input is a blank guest name at generation time.

use serde::Serialize;
use thiserror::Error;

/// Flow tick rate
pub const FLOW_TICK_HZ: u32 = 60;
/// Intro splash before the envelope drops in (2.0 s)
pub const INTRO_TICKS: u32 = 2 * FLOW_TICK_HZ;
/// Envelope flap animation before the letter is readable (0.8 s)
pub const OPENING_TICKS: u32 = 48;
/// Polaroid developing time (3.5 s)
pub const DEVELOP_TICKS: u32 = 210;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("guest name must not be blank")]
    EmptyName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnvelopeStep {
    /// Logo splash, auto-advances
    Intro { ticks_left: u32 },
    /// Envelope waiting to be tapped
    Sealed,
    /// Flap opening, auto-advances
    Opening { ticks_left: u32 },
    /// Letter with the event details on display
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TicketStep {
    /// Name and photo form
    Personalize,
    /// Polaroid developing, auto-advances
    Developing { ticks_left: u32 },
    /// Finished ticket, ready to print
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Envelope(EnvelopeStep),
    Landing,
    Ticket(TicketStep),
}

/// The invitation flow, owned by whatever hosts the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flow {
    pub view: View,
    /// Guest name, kept across edit round-trips
    pub guest_name: String,
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}

impl Flow {
    pub fn new() -> Self {
        Self {
            view: View::Envelope(EnvelopeStep::Intro {
                ticks_left: INTRO_TICKS,
            }),
            guest_name: String::new(),
        }
    }

    /// Advance timed transitions by one tick
    pub fn tick(&mut self) {
        self.view = match self.view {
            View::Envelope(EnvelopeStep::Intro { ticks_left }) => {
                if ticks_left <= 1 {
                    View::Envelope(EnvelopeStep::Sealed)
                } else {
                    View::Envelope(EnvelopeStep::Intro {
                        ticks_left: ticks_left - 1,
                    })
                }
            }
            View::Envelope(EnvelopeStep::Opening { ticks_left }) => {
                if ticks_left <= 1 {
                    View::Envelope(EnvelopeStep::Letter)
                } else {
                    View::Envelope(EnvelopeStep::Opening {
                        ticks_left: ticks_left - 1,
                    })
                }
            }
            View::Ticket(TicketStep::Developing { ticks_left }) => {
                if ticks_left <= 1 {
                    log::debug!("ticket developed for {:?}", self.guest_name);
                    View::Ticket(TicketStep::Ready)
                } else {
                    View::Ticket(TicketStep::Developing {
                        ticks_left: ticks_left - 1,
                    })
                }
            }
            other => other,
        };
    }

    /// Tap the sealed envelope
    pub fn open_envelope(&mut self) {
        if self.view == View::Envelope(EnvelopeStep::Sealed) {
            self.view = View::Envelope(EnvelopeStep::Opening {
                ticks_left: OPENING_TICKS,
            });
        }
    }

    /// Done reading the letter, on to the landing screen
    pub fn read_letter(&mut self) {
        if self.view == View::Envelope(EnvelopeStep::Letter) {
            self.view = View::Landing;
        }
    }

    /// YES tapped on the landing screen
    pub fn accept(&mut self) {
        if self.view == View::Landing {
            self.view = View::Ticket(TicketStep::Personalize);
        }
    }

    /// Back out of the ticket view to the landing screen
    pub fn back_to_landing(&mut self) {
        if matches!(self.view, View::Ticket(_)) {
            self.view = View::Landing;
        }
    }

    /// Submit the personalization form and start developing
    pub fn generate(&mut self, name: &str) -> Result<(), FlowError> {
        if self.view != View::Ticket(TicketStep::Personalize) {
            return Ok(());
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(FlowError::EmptyName);
        }
        self.guest_name = name.to_string();
        self.view = View::Ticket(TicketStep::Developing {
            ticks_left: DEVELOP_TICKS,
        });
        Ok(())
    }

    /// Go back and tweak the finished ticket
    pub fn edit(&mut self) {
        if self.view == View::Ticket(TicketStep::Ready) {
            self.view = View::Ticket(TicketStep::Personalize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_n(flow: &mut Flow, n: u32) {
        for _ in 0..n {
            flow.tick();
        }
    }

    #[test]
    fn test_intro_auto_advances() {
        let mut flow = Flow::new();
        tick_n(&mut flow, INTRO_TICKS - 1);
        assert!(matches!(flow.view, View::Envelope(EnvelopeStep::Intro { .. })));
        flow.tick();
        assert_eq!(flow.view, View::Envelope(EnvelopeStep::Sealed));
    }

    #[test]
    fn test_open_then_letter() {
        let mut flow = Flow::new();
        tick_n(&mut flow, INTRO_TICKS);
        flow.open_envelope();
        assert!(matches!(
            flow.view,
            View::Envelope(EnvelopeStep::Opening { .. })
        ));
        tick_n(&mut flow, OPENING_TICKS);
        assert_eq!(flow.view, View::Envelope(EnvelopeStep::Letter));
    }

    #[test]
    fn test_full_happy_path() {
        let mut flow = Flow::new();
        tick_n(&mut flow, INTRO_TICKS);
        flow.open_envelope();
        tick_n(&mut flow, OPENING_TICKS);
        flow.read_letter();
        assert_eq!(flow.view, View::Landing);

        flow.accept();
        assert_eq!(flow.view, View::Ticket(TicketStep::Personalize));

        flow.generate("  Ada Lovelace ").unwrap();
        assert_eq!(flow.guest_name, "Ada Lovelace");
        assert!(matches!(
            flow.view,
            View::Ticket(TicketStep::Developing { .. })
        ));

        tick_n(&mut flow, DEVELOP_TICKS);
        assert_eq!(flow.view, View::Ticket(TicketStep::Ready));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut flow = Flow::new();
        tick_n(&mut flow, INTRO_TICKS);
        flow.open_envelope();
        tick_n(&mut flow, OPENING_TICKS);
        flow.read_letter();
        flow.accept();

        assert_eq!(flow.generate("   "), Err(FlowError::EmptyName));
        assert_eq!(flow.view, View::Ticket(TicketStep::Personalize));
    }

    #[test]
    fn test_edit_round_trip_keeps_name() {
        let mut flow = Flow::new();
        flow.view = View::Ticket(TicketStep::Personalize);
        flow.generate("Grace").unwrap();
        tick_n(&mut flow, DEVELOP_TICKS);
        flow.edit();
        assert_eq!(flow.view, View::Ticket(TicketStep::Personalize));
        assert_eq!(flow.guest_name, "Grace");
    }

    #[test]
    fn test_back_exits_ticket_from_any_step() {
        let mut flow = Flow::new();
        flow.view = View::Ticket(TicketStep::Developing { ticks_left: 30 });
        flow.back_to_landing();
        assert_eq!(flow.view, View::Landing);
    }

    #[test]
    fn test_out_of_place_events_are_ignored() {
        let mut flow = Flow::new();
        let initial = flow.view;

        flow.open_envelope();
        flow.read_letter();
        flow.accept();
        flow.edit();
        flow.back_to_landing();
        assert_eq!(flow.view, initial);

        // generate() outside the form is a no-op, not an error
        assert_eq!(flow.generate("Someone"), Ok(()));
        assert_eq!(flow.view, initial);
        assert!(flow.guest_name.is_empty());
    }

    #[test]
    fn test_ticks_in_stable_views_do_nothing() {
        let mut flow = Flow::new();
        flow.view = View::Landing;
        tick_n(&mut flow, 1000);
        assert_eq!(flow.view, View::Landing);
    }
}
