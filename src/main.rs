// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling at the top level.

use roadwatch_cli::{api::ApiClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // Create an API client configured by the `ROADWATCH_API_URL`
    // environment variable, defaulting to the local backend. The session
    // store lives in the user's home directory, so a login from a
    // previous run is picked up here.
    let api = ApiClient::from_env()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api)?;
    Ok(())
}
