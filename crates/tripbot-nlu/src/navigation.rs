// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationIntent {
    Booking,
    Account,
    Profile,
}

/// Checked in this order; the first intent with a matching keyword wins.
const KEYWORDS: [(NavigationIntent, &[&str]); 3] = [
    (
        NavigationIntent::Booking,
        &["booking", "bookings", "my booking", "my bookings", "booking page"],
    ),
    (
        NavigationIntent::Account,
        &["account", "accounts", "statement", "account page", "statement page"],
    ),
    (
        NavigationIntent::Profile,
        &["profile", "my profile", "profile page"],
    ),
];

impl NavigationIntent {
    pub fn path(self) -> &'static str {
        match self {
            NavigationIntent::Booking => "/myaccounts/bookings",
            NavigationIntent::Account => "/myaccounts/accounts",
            NavigationIntent::Profile => "/myaccounts/profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavigationIntent::Booking => "My Bookings",
            NavigationIntent::Account => "Account Statement",
            NavigationIntent::Profile => "My Profile",
        }
    }

    pub fn url(self) -> String {
        self.url_on(crate::DEFAULT_SITE_DOMAIN)
    }

    pub fn url_on(self, domain: &str) -> String {
        format!("https://{}{}", domain, self.path())
    }

    pub fn keywords(self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(intent, _)| *intent == self)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }
}

/// Case-insensitive substring match against the account-page keywords.
/// Whole words are not required: "bookings" also contains "booking".
pub fn detect_navigation_intent(utterance: &str) -> Option<NavigationIntent> {
    let text = utterance.to_lowercase();
    let intent = KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(intent, _)| *intent);
    if let Some(intent) = intent {
        log::debug!("[Intent] '{}' -> navigation {:?}", utterance, intent);
    }
    intent
}
