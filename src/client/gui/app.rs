use std::sync::Arc;
use std::time::Duration;

use iced::{Application, Command, Element, Theme};

use crate::client::config::ClientConfig;
use crate::client::models::app_state::{CityFactsState, VALIDATION_MESSAGE};
use crate::client::models::messages::Message;
use crate::client::services::facts_service::FactsService;

pub struct CityFactsApp {
    pub state: CityFactsState,
    pub facts_service: Arc<FactsService>,
}

impl Application for CityFactsApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let cfg = ClientConfig::from_env();
        let app = CityFactsApp {
            state: CityFactsState::default(),
            facts_service: Arc::new(FactsService::new(Duration::from_secs(cfg.request_timeout_secs))),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "CityFacts".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Submit => {
                // One request at a time; a submit racing an in-flight one is
                // dropped rather than queued or cancelled.
                if self.state.loading {
                    return Command::none();
                }
                let query = match self.state.trimmed_query() {
                    Some(q) => q,
                    None => {
                        self.state.error_message = Some(VALIDATION_MESSAGE.to_string());
                        return Command::none();
                    }
                };

                self.state.loading = true;
                self.state.error_message = None;

                let svc = self.facts_service.clone();
                let base_url = ClientConfig::from_env().base_url();
                Command::perform(
                    async move {
                        match svc.fetch_or_generate(&base_url, &query).await {
                            Ok(city) => {
                                // The backend echoes its canonical casing of the
                                // name; fall back to what the user typed.
                                let name = if city.name.trim().is_empty() { query } else { city.name };
                                Message::FactsResult {
                                    success: true,
                                    city: name,
                                    message: city.facts,
                                }
                            }
                            Err(e) => {
                                log::error!("[APP] facts request for '{}' failed: {}", query, e);
                                Message::FactsResult {
                                    success: false,
                                    city: query,
                                    message: e.user_message(),
                                }
                            }
                        }
                    },
                    |msg| msg,
                )
            }
            other => self.state.update(other),
        }
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::city_form::view(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> CityFactsApp {
        let (app, _) = CityFactsApp::new(());
        app
    }

    #[test]
    fn blank_submit_sets_validation_error_without_loading() {
        let mut app = app();
        app.state.city_name = "   ".to_string();

        let _ = app.update(Message::Submit);

        assert_eq!(app.state.error_message.as_deref(), Some(VALIDATION_MESSAGE));
        assert!(!app.state.loading);
    }

    #[test]
    fn valid_submit_enters_loading_and_clears_error() {
        let mut app = app();
        app.state.city_name = " Paris ".to_string();
        app.state.error_message = Some("stale".to_string());

        let _ = app.update(Message::Submit);

        assert!(app.state.loading);
        assert!(app.state.error_message.is_none());
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut app = app();
        app.state.city_name = "Paris".to_string();
        app.state.loading = true;
        app.state.error_message = Some("previous".to_string());

        let _ = app.update(Message::Submit);

        // Nothing moved: still loading, error untouched.
        assert!(app.state.loading);
        assert_eq!(app.state.error_message.as_deref(), Some("previous"));
    }

    #[test]
    fn full_submit_cycle_settles_back_to_idle() {
        let mut app = app();
        app.state.city_name = "Paris".to_string();

        let _ = app.update(Message::Submit);
        assert!(app.state.loading);

        let _ = app.update(Message::FactsResult {
            success: true,
            city: "Paris".to_string(),
            message: "City of Light".to_string(),
        });

        assert!(!app.state.loading);
        assert_eq!(app.state.city, "Paris");
        assert_eq!(app.state.facts, "City of Light");
    }
}
