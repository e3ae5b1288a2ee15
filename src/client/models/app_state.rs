use iced::Command;

use crate::client::models::messages::Message;

/// Message shown when submit is pressed with a blank city name.
/// Purely UI-local; a blank query never reaches the network layer.
pub const VALIDATION_MESSAGE: &str = "Please enter a city name";

#[derive(Debug, Clone, Default)]
pub struct CityFactsState {
    /// Pending query, exactly as typed.
    pub city_name: String,
    /// Canonical name of the last successfully fetched city, used for the
    /// "About {city}" heading.
    pub city: String,
    /// Last successfully fetched facts blob. Never cleared by editing the
    /// input; only replaced by the next successful submit.
    pub facts: String,
    pub loading: bool,
    /// Persists until the next submit replaces or clears it.
    pub error_message: Option<String>,
}

impl CityFactsState {
    /// The query a submit would send, or `None` when validation rejects it.
    pub fn trimmed_query(&self) -> Option<String> {
        let trimmed = self.city_name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Handles every message that mutates state without touching the
    /// network. `Submit` lives in the app, where the async flow is spawned.
    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CityNameChanged(value) => {
                // Editing the field does not reset a stale error or result.
                self.city_name = value;
            }
            Message::FactsResult { success, city, message } => {
                // Guaranteed release: the flag drops on every settle path.
                self.loading = false;
                if success {
                    self.city = city;
                    self.facts = message;
                    self.error_message = None;
                } else {
                    self.error_message = Some(message);
                }
            }
            Message::NoOp | Message::Submit => {}
        }
        Command::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(success: bool, city: &str, message: &str) -> Message {
        Message::FactsResult {
            success,
            city: city.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn whitespace_only_query_is_rejected() {
        let mut state = CityFactsState::default();
        state.city_name = "   ".to_string();
        assert!(state.trimmed_query().is_none());
    }

    #[test]
    fn query_is_trimmed_before_use() {
        let mut state = CityFactsState::default();
        state.city_name = "  Paris  ".to_string();
        assert_eq!(state.trimmed_query().as_deref(), Some("Paris"));
    }

    #[test]
    fn success_populates_facts_and_clears_error() {
        let mut state = CityFactsState {
            loading: true,
            error_message: Some("old failure".to_string()),
            ..Default::default()
        };

        let _ = state.update(settled(true, "Paris", "City of Light\nFamous for the Eiffel Tower"));

        assert!(!state.loading);
        assert_eq!(state.city, "Paris");
        assert_eq!(state.facts, "City of Light\nFamous for the Eiffel Tower");
        assert!(state.error_message.is_none());
    }

    #[test]
    fn failure_sets_error_and_keeps_previous_facts() {
        let mut state = CityFactsState {
            loading: true,
            city: "Paris".to_string(),
            facts: "City of Light".to_string(),
            ..Default::default()
        };

        let _ = state.update(settled(false, "Berlin", "Something went wrong"));

        assert!(!state.loading);
        assert_eq!(state.error_message.as_deref(), Some("Something went wrong"));
        // The facts area keeps showing the previous result.
        assert_eq!(state.city, "Paris");
        assert_eq!(state.facts, "City of Light");
    }

    #[test]
    fn loading_is_released_on_every_settle_path() {
        for success in [true, false] {
            let mut state = CityFactsState {
                loading: true,
                ..Default::default()
            };
            let _ = state.update(settled(success, "Rome", "whatever"));
            assert!(!state.loading, "settle with success={success} must drop loading");
        }
    }

    #[test]
    fn editing_the_field_preserves_stale_error_and_result() {
        let mut state = CityFactsState {
            city: "Paris".to_string(),
            facts: "City of Light".to_string(),
            error_message: Some("Something went wrong".to_string()),
            ..Default::default()
        };

        let _ = state.update(Message::CityNameChanged("Lond".to_string()));

        assert_eq!(state.city_name, "Lond");
        assert_eq!(state.error_message.as_deref(), Some("Something went wrong"));
        assert_eq!(state.facts, "City of Light");
    }
}
