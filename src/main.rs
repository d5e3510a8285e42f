use log::info;

mod behaviors;
mod config;
mod error;
mod page;
mod theme;

mod components {
    pub mod analytics;
    pub mod navbar;
}
mod dashboard {
    pub mod cards;
    pub mod preview;
    pub mod templates;
}
mod motion {
    pub mod effects;
    pub mod observer;
    pub mod strategy;
}
mod pricing {
    pub mod plans;
    pub mod section;
}

use config::AppConfig;
use page::PageController;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = AppConfig::from_document();
    info!("Starting site behaviors with {:?}", config);

    match PageController::new(config) {
        Ok(controller) => controller.bind(),
        Err(e) => log::error!("page controller could not start: {}", e),
    }
}
