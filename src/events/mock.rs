// src/events/mock.rs
//! Fallback milestones shown when the live feed yields nothing usable.

use crate::events::types::{EventLink, HistoricalEvent};

fn link(title: &str, url: &str) -> EventLink {
    EventLink {
        title: title.to_string(),
        url: url.to_string(),
    }
}

/// The fixed five-milestone list substituted when the Wikipedia lane comes
/// back empty or fails. Order is display order.
pub fn space_milestones() -> Vec<HistoricalEvent> {
    vec![
        HistoricalEvent {
            year: 1969,
            description: "Apollo 11 astronauts Neil Armstrong and Edwin 'Buzz' Aldrin became the first humans to land on the Moon.".into(),
            links: vec![
                link("Apollo 11", "https://en.wikipedia.org/wiki/Apollo_11"),
                link("Neil Armstrong", "https://en.wikipedia.org/wiki/Neil_Armstrong"),
            ],
        },
        HistoricalEvent {
            year: 1957,
            description: "The Soviet Union launched Sputnik 1, the first artificial satellite to orbit Earth, beginning the Space Age.".into(),
            links: vec![
                link("Sputnik 1", "https://en.wikipedia.org/wiki/Sputnik_1"),
                link("Space Age", "https://en.wikipedia.org/wiki/Space_Age"),
            ],
        },
        HistoricalEvent {
            year: 1990,
            description: "The Hubble Space Telescope was deployed from Space Shuttle Discovery, revolutionizing astronomy with its deep space observations.".into(),
            links: vec![
                link("Hubble Space Telescope", "https://en.wikipedia.org/wiki/Hubble_Space_Telescope"),
            ],
        },
        HistoricalEvent {
            year: 1997,
            description: "NASA's Mars Pathfinder mission landed on Mars, delivering the Sojourner rover, the first rover to operate on the Red Planet.".into(),
            links: vec![
                link("Mars Pathfinder", "https://en.wikipedia.org/wiki/Mars_Pathfinder"),
                link("Sojourner (rover)", "https://en.wikipedia.org/wiki/Sojourner_(rover)"),
            ],
        },
        HistoricalEvent {
            year: 1961,
            description: "Yuri Gagarin became the first human to journey into outer space, completing one orbit of Earth aboard the Vostok 1 spacecraft.".into(),
            links: vec![
                link("Yuri Gagarin", "https://en.wikipedia.org/wiki/Yuri_Gagarin"),
                link("Vostok 1", "https://en.wikipedia.org/wiki/Vostok_1"),
            ],
        },
    ]
}
