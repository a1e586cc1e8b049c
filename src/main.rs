use std::io;

use chrono::Local;
use tracing::info;

use people_registry::configuration::get_static_configuration;
use people_registry::menu::Menu;
use people_registry::telemetry::{get_subscriber, init_subscriber};
use people_registry::Database;

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = get_static_configuration()?;

    let subscriber = get_subscriber(
        String::from("people-registry"),
        configuration.log_level.clone(),
        io::stderr,
    );
    init_subscriber(subscriber)?;

    info!("starting with default file {}", configuration.storage.default_file);

    let mut database = Database::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(
        &mut database,
        stdin.lock(),
        stdout.lock(),
        configuration.storage.default_path(),
        today,
    )
    .run()?;

    Ok(())
}
