#[derive(Debug, Clone)]
pub enum Message {
    // No operation - used when a widget needs a message but nothing should happen
    NoOp,
    CityNameChanged(String),
    Submit,
    /// Settles the in-flight request. On success `message` carries the facts
    /// blob and `city` the backend's canonical name; on failure `message` is
    /// the banner text.
    FactsResult {
        success: bool,
        city: String,
        message: String,
    },
}
