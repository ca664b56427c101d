// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::dates::resolve_date;
use crate::registry::{self, AirportEntry};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Words that make an utterance worth treating as a flight search.
pub const TRAVEL_KEYWORDS: [&str; 7] = ["flight", "flights", "fly", "travel", "book", "search", "list"];

/// Origin/destination are registry keys, or empty when unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlightIntent {
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
}

impl FlightIntent {
    pub fn parse(input: &str, today: NaiveDate) -> Self {
        let mut intent = FlightIntent::default();
        let input_lower = input.to_lowercase();

        // 1. Connector phrases: "from X to Y", "X to Y", "X-Y"
        if let Some((origin, destination)) = connector_pair(&input_lower) {
            intent.origin = origin;
            intent.destination = destination;
        } else {
            // 2. Fallback: first two known cities in the order they are mentioned.
            // Utterances naming three or more cities keep only the first two.
            let found = cities_in_text(&input_lower);
            if let [first, second, ..] = found.as_slice() {
                intent.origin = first.city.to_string();
                intent.destination = second.city.to_string();
            }
        }

        // 3. Date is always resolved, even without cities.
        intent.date = Some(resolve_date(input, today));

        log::debug!(
            "[Intent] flight parse '{}' -> origin='{}' destination='{}' date={:?}",
            input,
            intent.origin,
            intent.destination,
            intent.date
        );
        intent
    }

    /// Both cities present in the registry and a date set.
    pub fn is_complete(&self) -> bool {
        self.origin_entry().is_some() && self.destination_entry().is_some() && self.date.is_some()
    }

    pub fn origin_entry(&self) -> Option<&'static AirportEntry> {
        non_empty(&self.origin).and_then(registry::lookup)
    }

    pub fn destination_entry(&self) -> Option<&'static AirportEntry> {
        non_empty(&self.destination).and_then(registry::lookup)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

pub fn extract_flight_intent(utterance: &str, today: NaiveDate) -> FlightIntent {
    FlightIntent::parse(utterance, today)
}

/// Case-insensitive substring check for any of [`TRAVEL_KEYWORDS`].
pub fn has_travel_keyword(utterance: &str) -> bool {
    let text = utterance.to_lowercase();
    TRAVEL_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Known cities appearing anywhere in `text`, ordered by first occurrence.
pub fn cities_in_text(text: &str) -> Vec<&'static AirportEntry> {
    let text = text.to_lowercase();
    let mut found: Vec<(usize, &'static AirportEntry)> = registry::entries()
        .iter()
        .filter_map(|e| text.find(e.city).map(|pos| (pos, e)))
        .collect();
    found.sort_by_key(|&(pos, _)| pos);
    found.into_iter().map(|(_, e)| e).collect()
}

fn connector_pair(text: &str) -> Option<(String, String)> {
    static FROM_TO_RE: OnceLock<Regex> = OnceLock::new();
    static TO_RE: OnceLock<Regex> = OnceLock::new();
    static DASH_RE: OnceLock<Regex> = OnceLock::new();
    let from_to =
        FROM_TO_RE.get_or_init(|| Regex::new(r"\bfrom\s+(\w+)\s+to\s+(\w+)").unwrap());
    let to = TO_RE.get_or_init(|| Regex::new(r"(\w+)\s+to\s+(\w+)").unwrap());
    let dash = DASH_RE.get_or_init(|| Regex::new(r"(\w+)\s*-\s*(\w+)").unwrap());

    // Only the first match of each pattern is considered.
    [from_to, to, dash].into_iter().find_map(|re| {
        let caps = re.captures(text)?;
        let origin = caps[1].to_lowercase();
        let destination = caps[2].to_lowercase();
        if registry::is_known_city(&origin) && registry::is_known_city(&destination) {
            Some((origin, destination))
        } else {
            None
        }
    })
}
