// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Markdown replies for recognised intents.

use serde::{Deserialize, Serialize};
use tripbot_nlu::{FlightIntent, NavigationResponse, SearchRequest};

/// Markdown dialect of the chat surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStyle {
    /// CommonMark as rendered by the web widget: `**bold**`, icon inside the link text.
    #[default]
    Web,
    /// Telegram legacy Markdown: `*bold*`, icon before the link.
    Telegram,
}

impl ReplyStyle {
    fn bold(self, text: &str) -> String {
        match self {
            ReplyStyle::Web => format!("**{}**", text),
            ReplyStyle::Telegram => format!("*{}*", text),
        }
    }

    fn link(self, icon: &str, text: &str, url: &str) -> String {
        match self {
            ReplyStyle::Web => format!("[{} {}]({})", icon, text, url),
            ReplyStyle::Telegram => format!("{} [{}]({})", icon, text, url),
        }
    }
}

impl std::str::FromStr for ReplyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" | "markdown" => Ok(ReplyStyle::Web),
            "telegram" | "tg" => Ok(ReplyStyle::Telegram),
            other => Err(format!("unknown reply style '{}'", other)),
        }
    }
}

pub fn render_navigation(
    response: &NavigationResponse,
    style: ReplyStyle,
    brand: &str,
) -> String {
    let label = &response.label;
    format!(
        "{emoji} {title}\n\n{description}\n\n{link}\n\nClick the link above to access your {lower} page. You'll need to sign in to your {brand} account if you haven't already.\n\nNeed help with anything else? I can assist with flight searches, hotel bookings, or answer questions about {brand}'s services!",
        emoji = response.emoji,
        title = style.bold(label),
        description = response.description,
        link = style.link("🔗", &format!("Go to {}", label), &response.url),
        lower = label.to_lowercase(),
        brand = brand,
    )
}

pub fn render_flight_search(
    intent: &FlightIntent,
    request: &SearchRequest,
    style: ReplyStyle,
    domain: &str,
    brand: &str,
) -> String {
    let short_url = format!(
        "{}/flights → {} to {}",
        domain.trim_start_matches("www."),
        request.origin_code,
        request.destination_code
    );
    format!(
        "🛫 {title}\n\n{route_label} {origin} ({origin_code}) → {destination} ({destination_code})\n{date_label} {date}\n{class_label} {class}\n{pax_label} {pax}\n\n{link}\n\nClick the link above to view all available flights for your selected route and date. You can modify passengers, class type, and other preferences on the search page.\n\nNeed help with return flights, hotels, or have questions about {brand}'s services?",
        title = style.bold("Flight Search Results"),
        route_label = style.bold("Route:"),
        origin = capitalize(&intent.origin),
        origin_code = request.origin_code,
        destination = capitalize(&intent.destination),
        destination_code = request.destination_code,
        date_label = style.bold("Travel Date:"),
        date = request.display_date,
        class_label = style.bold("Class:"),
        class = capitalize(&request.class_type.to_lowercase()),
        pax_label = style.bold("Passengers:"),
        pax = passengers_label(request.passengers),
        link = style.link(
            "✈️",
            &format!("Search Available Flights: {}", short_url),
            &request.url_on(domain)
        ),
        brand = brand,
    )
}

fn passengers_label(count: u32) -> String {
    if count == 1 {
        "1 Adult".to_string()
    } else {
        format!("{} Adults", count)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
