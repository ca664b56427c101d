// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::flight::FlightIntent;
use crate::navigation::NavigationIntent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PASSENGERS: u32 = 1;
pub const DEFAULT_CLASS_TYPE: &str = "ECONOMY";

/// Parameters of a one-way search on the booking site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub origin_code: String,
    pub destination_code: String,
    /// `YYYY-MM-DD`, used in the URL.
    pub iso_date: String,
    /// `DD/MM/YYYY`, shown to the user.
    pub display_date: String,
    pub passengers: u32,
    pub class_type: String,
}

impl SearchRequest {
    pub fn new(origin_code: &str, destination_code: &str, date: NaiveDate) -> Self {
        Self {
            origin_code: origin_code.to_uppercase(),
            destination_code: destination_code.to_uppercase(),
            iso_date: date.format("%Y-%m-%d").to_string(),
            display_date: date.format("%d/%m/%Y").to_string(),
            passengers: DEFAULT_PASSENGERS,
            class_type: DEFAULT_CLASS_TYPE.to_string(),
        }
    }

    pub fn url(&self) -> String {
        self.url_on(crate::DEFAULT_SITE_DOMAIN)
    }

    /// Parameter order and the fixed country/flag values are what the
    /// booking site's one-way search page expects.
    pub fn url_on(&self, domain: &str) -> String {
        format!(
            "https://{domain}/flights/oneway?adult_count={passengers}&child_count=0&class_type={class}&destination={dest}&destinationCountry=IN&host_search=false&infant_count=0&non_stop=false&origin={origin}&originCountry=IN&search_type=one_way&travel_date={date}",
            domain = domain,
            passengers = self.passengers,
            class = self.class_type,
            dest = self.destination_code,
            origin = self.origin_code,
            date = self.iso_date,
        )
    }
}

/// Builds the search for a complete intent; `None` when a city or the date
/// is missing, so an incomplete intent can never reach the URL builder.
pub fn synthesize_search_request(intent: &FlightIntent) -> Option<SearchRequest> {
    let origin = intent.origin_entry()?;
    let destination = intent.destination_entry()?;
    let date = intent.date?;
    Some(SearchRequest::new(origin.code, destination.code, date))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub intent: NavigationIntent,
    pub emoji: String,
    pub description: String,
    pub url: String,
    pub label: String,
}

pub fn synthesize_navigation_response(intent: NavigationIntent) -> NavigationResponse {
    synthesize_navigation_response_on(intent, crate::DEFAULT_SITE_DOMAIN)
}

pub fn synthesize_navigation_response_on(
    intent: NavigationIntent,
    domain: &str,
) -> NavigationResponse {
    let (emoji, description) = match intent {
        NavigationIntent::Booking => (
            "✈️",
            "View and manage all your flight bookings, hotel reservations, and travel itineraries in one place.",
        ),
        NavigationIntent::Account => (
            "💳",
            "Check your account balance, transaction history, and payment statements.",
        ),
        NavigationIntent::Profile => (
            "👤",
            "Update your personal information, travel preferences, and account settings.",
        ),
    };
    NavigationResponse {
        intent,
        emoji: emoji.to_string(),
        description: description.to_string(),
        url: intent.url_on(domain),
        label: intent.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_search_request_from_complete_intent() {
        let intent = FlightIntent {
            origin: "chennai".to_string(),
            destination: "mumbai".to_string(),
            date: Some(date(2025, 1, 11)),
        };
        let req = synthesize_search_request(&intent).expect("complete intent");
        assert_eq!(req.origin_code, "MAA");
        assert_eq!(req.destination_code, "BOM");
        assert_eq!(req.iso_date, "2025-01-11");
        assert_eq!(req.display_date, "11/01/2025");
        assert_eq!(req.passengers, 1);
        assert_eq!(req.class_type, "ECONOMY");
    }

    #[test]
    fn test_incomplete_intent_yields_nothing() {
        let missing_city = FlightIntent {
            origin: "chennai".to_string(),
            destination: String::new(),
            date: Some(date(2025, 1, 11)),
        };
        assert_eq!(synthesize_search_request(&missing_city), None);

        let missing_date = FlightIntent {
            origin: "chennai".to_string(),
            destination: "goa".to_string(),
            date: None,
        };
        assert_eq!(synthesize_search_request(&missing_date), None);
    }

    #[test]
    fn test_url_layout() {
        let req = SearchRequest::new("maa", "bom", date(2025, 1, 11));
        assert_eq!(
            req.url(),
            "https://www.codemagen.net/flights/oneway?adult_count=1&child_count=0&class_type=ECONOMY&destination=BOM&destinationCountry=IN&host_search=false&infant_count=0&non_stop=false&origin=MAA&originCountry=IN&search_type=one_way&travel_date=2025-01-11"
        );
        assert!(req
            .url_on("test.local")
            .starts_with("https://test.local/flights/oneway?"));
    }

    #[test]
    fn test_dates_agree() {
        let req = SearchRequest::new("DEL", "GOI", date(2026, 12, 5));
        assert_eq!(req.iso_date, "2026-12-05");
        assert_eq!(req.display_date, "05/12/2026");
        let parsed = NaiveDate::parse_from_str(&req.display_date, "%d/%m/%Y").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), req.iso_date);
    }

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let req = SearchRequest::new("DEL", "GOI", date(2026, 12, 5));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["origin_code"], "DEL");
        assert_eq!(json["class_type"], "ECONOMY");
    }

    #[test]
    fn test_navigation_response_table() {
        let r = synthesize_navigation_response(NavigationIntent::Booking);
        assert_eq!(r.emoji, "✈️");
        assert_eq!(r.label, "My Bookings");
        assert!(r.url.ends_with("/myaccounts/bookings"));

        let r = synthesize_navigation_response_on(NavigationIntent::Account, "example.org");
        assert_eq!(r.emoji, "💳");
        assert_eq!(r.url, "https://example.org/myaccounts/accounts");
        assert!(r.description.contains("transaction history"));

        let r = synthesize_navigation_response(NavigationIntent::Profile);
        assert_eq!(r.emoji, "👤");
        assert_eq!(r.label, "My Profile");
    }
}
