// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Rule-based understanding of travel-assistant utterances.
//!
//! Everything in this crate is pure: the only external input besides the
//! utterance is the calendar date treated as "today", which callers pass in.

pub mod dates;
pub mod flight;
pub mod navigation;
pub mod registry;
pub mod router;
pub mod search;

pub use dates::resolve_date;
pub use flight::{extract_flight_intent, has_travel_keyword, FlightIntent};
pub use navigation::{detect_navigation_intent, NavigationIntent};
pub use registry::{resolve_code, AirportEntry};
pub use router::{route, Route};
pub use search::{
    synthesize_navigation_response, synthesize_search_request, NavigationResponse, SearchRequest,
};

/// Site that hosts the account pages and the flight search.
pub const DEFAULT_SITE_DOMAIN: &str = "www.codemagen.net";
