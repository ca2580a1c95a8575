//! Walks the campsite listing through "load more" until the last page and
//! prints the resulting grid.

use std::env;

use dotenvy::dotenv;

use campsite_directory::models::config::{PaginationSettings, load_client_config};
use campsite_directory::render::ListingRenderer;
use campsite_directory::repository::http::HttpRepository;
use campsite_directory::services::listing::{FetchMode, ListingController};
use campsite_directory::view::DocumentRegions;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let client_config = match load_client_config(&app_env) {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match HttpRepository::new(&client_config.base_url, client_config.timeout()) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let renderer = match ListingRenderer::new() {
        Ok(renderer) => renderer.with_auth_required(client_config.auth_required),
        Err(err) => {
            log::error!("Template parsing error(s): {err}");
            std::process::exit(1);
        }
    };

    let settings = PaginationSettings {
        endpoint: client_config.listing_endpoint.clone(),
        initial_country: env::var("CAMPSITE_COUNTRY").unwrap_or_default(),
        initial_search: env::var("CAMPSITE_SEARCH").unwrap_or_default(),
        ..PaginationSettings::default()
    };

    let mut controller =
        ListingController::new(&settings, repo, DocumentRegions::default(), renderer);

    log::info!("Crawling {}{}", client_config.base_url, settings.endpoint);

    // The snapshot does not know the real total yet, so start from page 1.
    controller.fetch_page(1, FetchMode::Replace);
    if !controller.view().alerts.is_empty() {
        std::process::exit(1);
    }

    while !controller.load_more_state().disabled {
        if !controller.on_load_more_clicked() || !controller.view().alerts.is_empty() {
            break;
        }
        log::info!(
            "Loaded page {} of {}",
            controller.state().current_page,
            controller.state().total_pages
        );
    }

    log::info!("{}", controller.view().total_label);
    println!("{}", controller.view().grid());
}
