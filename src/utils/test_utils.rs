#[cfg(test)]
use crate::core::app::App;
#[cfg(test)]
use crate::core::config::Config;

/// App seeded like a default startup: the opening chapter plus the default bible.
#[cfg(test)]
pub fn create_test_app() -> App {
    App::from_config(&Config::default(), false)
}

/// App with the default bible and no chapters.
#[cfg(test)]
pub fn create_empty_test_app() -> App {
    App::from_config(&Config::default(), true)
}

#[cfg(test)]
pub fn log_texts(app: &App) -> Vec<&str> {
    app.status
        .entries()
        .iter()
        .map(|entry| entry.text.as_str())
        .collect()
}

#[cfg(test)]
pub const SAMPLE_PARAGRAPH: &str = "The neon lights of Neo-Seoul flickered over the wet market stalls while Lee counted the drones circling the old broadcast tower, each one humming a different frequency of the same tired warning about curfew, rationing, and the storm that had been promised for three days and never arrived.";
