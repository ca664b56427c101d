// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AirportEntry {
    pub city: &'static str,
    pub code: &'static str,
}

const fn entry(city: &'static str, code: &'static str) -> AirportEntry {
    AirportEntry { city, code }
}

// Keys are lowercase ASCII and unique. Table order is irrelevant to parsing:
// the flight extractor orders cities by where they occur in the utterance.
static AIRPORTS: [AirportEntry; 24] = [
    entry("chennai", "MAA"),
    entry("mumbai", "BOM"),
    entry("bangalore", "BLR"),
    entry("delhi", "DEL"),
    entry("kolkata", "CCU"),
    entry("hyderabad", "HYD"),
    entry("pune", "PNQ"),
    entry("ahmedabad", "AMD"),
    entry("goa", "GOI"),
    entry("kochi", "COK"),
    entry("jaipur", "JAI"),
    entry("lucknow", "LKO"),
    entry("indore", "IDR"),
    entry("bhubaneswar", "BBI"),
    entry("coimbatore", "CJB"),
    entry("madurai", "IXM"),
    entry("trivandrum", "TRV"),
    entry("calicut", "CCJ"),
    entry("vijayawada", "VGA"),
    entry("tirupati", "TIR"),
    entry("nashik", "ISK"),
    entry("udaipur", "UDR"),
    entry("salem", "SXV"),
    // Common misspelling of Salem.
    entry("selam", "SXV"),
];

fn index() -> &'static HashMap<&'static str, &'static AirportEntry> {
    static INDEX: OnceLock<HashMap<&'static str, &'static AirportEntry>> = OnceLock::new();
    INDEX.get_or_init(|| AIRPORTS.iter().map(|e| (e.city, e)).collect())
}

/// All supported cities, in table order.
pub fn entries() -> &'static [AirportEntry] {
    &AIRPORTS
}

/// O(1) lookup by city name (case-insensitive, surrounding whitespace ignored).
pub fn lookup(city: &str) -> Option<&'static AirportEntry> {
    let key = city.trim().to_lowercase();
    index().get(key.as_str()).copied()
}

pub fn is_known_city(city: &str) -> bool {
    lookup(city).is_some()
}

/// Returns the airport code for a city. Unknown input is treated as if it
/// already were a code and comes back uppercased.
pub fn resolve_code(city_text: &str) -> String {
    match lookup(city_text) {
        Some(entry) => entry.code.to_string(),
        None => city_text.to_uppercase(),
    }
}
