// listings-admin: terminal admin for rental listings.
// Lists listings from a GraphQL backend and deletes them on request.

mod app;
mod config;
mod error;
mod graphql;
mod logging;
mod runtime;
mod state;
mod ui;

use app::App;
use config::Config;
use error::Result;
use graphql::GraphQlClient;
use runtime::Dispatcher;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;

    let client = GraphQlClient::new(&config)?;
    tracing::info!(endpoint = client.endpoint(), "starting listings-admin");

    let (dispatcher, mut outcomes) = Dispatcher::new(client);
    let mut app = App::new(config.title.clone());

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal, &dispatcher, &mut outcomes);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result?;

    tracing::info!("listings-admin exited");
    Ok(())
}
