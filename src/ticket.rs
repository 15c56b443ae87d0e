//! Souvenir ticket assembly
//!
//! Fixed event details merged with per-guest randomized extras: an
//! "obsession" stamped on the Polaroid, a four-digit ticket number, and a
//! seed for the placeholder photo when no mugshot was captured.

use serde::{Deserialize, Serialize};

use crate::interact::RandomSource;

/// Obsessions stamped on tickets, drawn uniformly at random
pub const OBSESSIONS: &[&str] = &[
    "Speed",
    "Margins",
    "Craft",
    "Shipping",
    "Chaos",
    "Customer Anger",
    "Clean Systems",
    "Fonts",
];

/// The invitation's fixed event details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            name: "ShopOS HSR Office Inauguration Night".to_string(),
            date: "23rd February".to_string(),
            time: "7:00 PM – 11:00 PM".to_string(),
            location: "ShopOS, HSR".to_string(),
            description: "Drinks. Music. Zero boring speeches. Come for the vibes. \
                          Stay for the obsession."
                .to_string(),
        }
    }
}

/// A personalized souvenir ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub guest: String,
    /// Randomly assigned obsession, printed on the Polaroid frame
    pub obsession: String,
    /// Four-digit ticket number (1000..=9999)
    pub ticket_id: u16,
    /// Seed for the placeholder photo service
    pub photo_seed: u16,
    pub event: EventDetails,
}

impl Ticket {
    /// Issue a ticket for `guest` with freshly drawn extras
    pub fn issue(guest: impl Into<String>, rng: &mut impl RandomSource) -> Self {
        let ticket = Self {
            guest: guest.into(),
            obsession: OBSESSIONS[rng.pick(OBSESSIONS.len())].to_string(),
            ticket_id: 1000 + rng.pick(9000) as u16,
            photo_seed: rng.pick(1000) as u16,
            event: EventDetails::default(),
        };
        log::info!(
            "issued ticket #{} for {} (obsession: {})",
            ticket.ticket_id,
            ticket.guest,
            ticket.obsession
        );
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PcgSource;

    #[test]
    fn test_issue_ranges() {
        let mut rng = PcgSource::seeded(2024);
        for _ in 0..128 {
            let ticket = Ticket::issue("Ada", &mut rng);
            assert!((1000..=9999).contains(&ticket.ticket_id));
            assert!(ticket.photo_seed < 1000);
            assert!(OBSESSIONS.contains(&ticket.obsession.as_str()));
        }
    }

    #[test]
    fn test_issue_is_deterministic() {
        let mut a = PcgSource::seeded(7);
        let mut b = PcgSource::seeded(7);
        assert_eq!(Ticket::issue("Ada", &mut a), Ticket::issue("Ada", &mut b));
    }

    #[test]
    fn test_json_round_trip() {
        let mut rng = PcgSource::seeded(1);
        let ticket = Ticket::issue("Grace", &mut rng);
        let json = serde_json::to_string(&ticket).unwrap();
        let back: Ticket = serde_json::from_str(&json).unwrap();
        assert_eq!(ticket, back);
    }
}
