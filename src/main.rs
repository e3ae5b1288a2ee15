use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    let _ = cityfacts::utils::logger::CityFactsLogger::init();
    cityfacts::client::gui::app::CityFactsApp::run(iced::Settings::default())
}
