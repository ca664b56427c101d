// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::config::AssistantConfig;
use crate::fallback::FallbackResponder;
use crate::prompts::{START_COMMAND, SYSTEM_CONTEXT, WELCOME_MESSAGE};
use crate::reply::{render_flight_search, render_navigation};
use crate::AssistantError;
use chrono::NaiveDate;
use tripbot_nlu::router::route_on;
use tripbot_nlu::Route;

/// One chat turn in, one markdown reply out.
pub struct Assistant<R: FallbackResponder> {
    config: AssistantConfig,
    responder: R,
}

impl<R: FallbackResponder> Assistant<R> {
    pub fn new(config: AssistantConfig, responder: R) -> Self {
        Self { config, responder }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn responder(&self) -> &R {
        &self.responder
    }

    pub fn route(&self, utterance: &str, today: NaiveDate) -> Route {
        route_on(utterance, today, &self.config.site_domain)
    }

    pub fn try_reply(&self, message: &str, today: NaiveDate) -> Result<String, AssistantError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        if trimmed == START_COMMAND {
            return Ok(WELCOME_MESSAGE.to_string());
        }

        let style = self.config.reply_style;
        let brand = &self.config.brand_name;
        match self.route(trimmed, today) {
            Route::Navigation(response) => {
                log::info!("[Assistant] Navigation -> {}", response.url);
                Ok(render_navigation(&response, style, brand))
            }
            Route::FlightSearch { intent, request } => {
                log::info!(
                    "[Assistant] Flight search {} -> {} on {}",
                    request.origin_code,
                    request.destination_code,
                    request.iso_date
                );
                Ok(render_flight_search(
                    &intent,
                    &request,
                    style,
                    &self.config.site_domain,
                    brand,
                ))
            }
            Route::Fallback => {
                log::info!("[Assistant] No rule matched, using language model");
                self.responder.respond(SYSTEM_CONTEXT, message)
            }
        }
    }

    /// Never fails: errors become an apology the user can read.
    pub fn reply(&self, message: &str, today: NaiveDate) -> String {
        self.try_reply(message, today).unwrap_or_else(|e| {
            log::error!("[Assistant] {}", e);
            apology(&e)
        })
    }
}

pub fn apology(error: &AssistantError) -> String {
    format!(
        "Sorry, I encountered an error: {}. Please try again later.",
        error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::ReplyStyle;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl FallbackResponder for Recorder {
        fn respond(&self, system_context: &str, utterance: &str) -> Result<String, AssistantError> {
            self.calls
                .borrow_mut()
                .push((system_context.to_string(), utterance.to_string()));
            Ok("model says hi".to_string())
        }
    }

    struct Broken;

    impl FallbackResponder for Broken {
        fn respond(&self, _: &str, _: &str) -> Result<String, AssistantError> {
            Err(AssistantError::Api {
                status: 500,
                message: "upstream down".to_string(),
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[test]
    fn test_start_command_greets() {
        let bot = Assistant::new(AssistantConfig::default(), Recorder::default());
        assert_eq!(bot.reply("/start", today()), WELCOME_MESSAGE);
        assert!(bot.responder.calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_message() {
        let bot = Assistant::new(AssistantConfig::default(), Recorder::default());
        assert!(matches!(
            bot.try_reply("   ", today()),
            Err(AssistantError::EmptyMessage)
        ));
    }

    #[test]
    fn test_navigation_does_not_call_model() {
        let bot = Assistant::new(AssistantConfig::default(), Recorder::default());
        let text = bot.reply("show my bookings", today());
        assert!(text.contains("https://www.codemagen.net/myaccounts/bookings"));
        assert!(bot.responder.calls.borrow().is_empty());
    }

    #[test]
    fn test_flight_uses_configured_domain_and_style() {
        let config = AssistantConfig {
            site_domain: "staging.codemagen.net".to_string(),
            reply_style: ReplyStyle::Telegram,
            ..AssistantConfig::default()
        };
        let bot = Assistant::new(config, Recorder::default());
        let text = bot.reply("flights from chennai to mumbai tomorrow", today());
        assert!(text.starts_with("🛫 *Flight Search Results*"));
        assert!(text.contains("https://staging.codemagen.net/flights/oneway?"));
        assert!(text.contains("travel_date=2025-01-11"));
        assert!(bot.responder.calls.borrow().is_empty());
    }

    #[test]
    fn test_fallback_passes_system_context() {
        let bot = Assistant::new(AssistantConfig::default(), Recorder::default());
        assert_eq!(bot.reply("  who founded codemagen? ", today()), "model says hi");
        let calls = bot.responder.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SYSTEM_CONTEXT);
        // The model sees the message exactly as the user sent it.
        assert_eq!(calls[0].1, "  who founded codemagen? ");
    }

    #[test]
    fn test_errors_become_apology() {
        let bot = Assistant::new(AssistantConfig::default(), Broken);
        assert_eq!(
            bot.reply("tell me a joke", today()),
            "Sorry, I encountered an error: Language model returned 500: upstream down. Please try again later."
        );
    }
}
