// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::flight::{has_travel_keyword, FlightIntent};
use crate::navigation::detect_navigation_intent;
use crate::search::{
    synthesize_navigation_response_on, synthesize_search_request, NavigationResponse,
    SearchRequest,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of routing one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Navigation(NavigationResponse),
    FlightSearch {
        intent: FlightIntent,
        request: SearchRequest,
    },
    /// Nothing recognised; hand the utterance to the general responder.
    Fallback,
}

impl Route {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Route::Fallback)
    }
}

pub fn route(utterance: &str, today: NaiveDate) -> Route {
    route_on(utterance, today, crate::DEFAULT_SITE_DOMAIN)
}

/// Account pages take priority over flights. A flight search needs both a
/// travel keyword and a complete intent; anything else falls through.
pub fn route_on(utterance: &str, today: NaiveDate, domain: &str) -> Route {
    if let Some(intent) = detect_navigation_intent(utterance) {
        return Route::Navigation(synthesize_navigation_response_on(intent, domain));
    }

    if has_travel_keyword(utterance) {
        let intent = FlightIntent::parse(utterance, today);
        if let Some(request) = synthesize_search_request(&intent) {
            log::debug!(
                "[Intent] '{}' -> flight search {} -> {} on {}",
                utterance,
                request.origin_code,
                request.destination_code,
                request.iso_date
            );
            return Route::FlightSearch { intent, request };
        }
        log::debug!("[Intent] '{}' has travel keywords but no complete route", utterance);
    }

    Route::Fallback
}
