// src/facts.rs
//! Space fact bank with a deterministic fact-of-the-day selection.

use chrono::{Datelike, NaiveDate};

pub const FACTS: &[&str] = &[
    "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
    "A day on Venus is longer than its year. It takes Venus 243 Earth days to rotate on its axis but only 225 Earth days to orbit the Sun.",
    "The largest known star, UY Scuti, is so big that it would take 1,700 years for a passenger jet to fly around it.",
    "There are more stars in the universe than grains of sand on all of Earth's beaches combined.",
    "Black holes aren't actually black. They emit radiation, now known as Hawking radiation.",
    "The footprints left by Apollo astronauts on the Moon will last for at least 100 million years.",
    "One day on Mars is 24 hours and 37 minutes long.",
    "The Great Red Spot on Jupiter is a giant storm that has been raging for at least 400 years.",
    "If you could put Saturn in a giant bathtub, it would float. The planet's density is less than that of water.",
    "The Milky Way galaxy is moving through space at a speed of about 2.1 million kilometers per hour.",
    "There is a planet made largely of diamonds, called 55 Cancri e.",
    "The largest asteroid ever recorded is Ceres, which is also classified as a dwarf planet.",
    "The temperature at the Sun's core is about 15 million degrees Celsius.",
    "Astronauts grow taller in space due to the lack of gravity on their spine.",
    "The most distant human-made object is Voyager 1, launched in 1977.",
];

/// Pick the fact for a given date by day-of-year, so every caller sees the
/// same fact on the same day.
pub fn fact_for_date(date: NaiveDate) -> &'static str {
    FACTS[(date.ordinal0() as usize) % FACTS.len()]
}
