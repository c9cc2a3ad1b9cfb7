mod catalog;
mod commands;
mod config;
mod error;
mod handlers;
mod models;
mod reporter;
mod session;
mod settings;
mod voting;

use catalog::Catalog;
use commands::Reply;
use config::Config;
use log::{error, info, warn};
use reporter::LogReporter;
use session::Session;
use std::io::{self, BufRead, Write};

fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    settings::init(config.settings);

    let catalog = match Catalog::load(config.fixtures_path.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load fixtures: {}", e);
            return;
        }
    };

    let mut session = Session::new(LogReporter);
    info!("Session {} ready", session.id());

    if let Err(why) = run(&catalog, &mut session) {
        error!("Terminal error: {:?}", why);
    }
}

fn run(catalog: &Catalog, session: &mut Session<LogReporter>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", commands::render_home(catalog))?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        // Component ids act on the current screen; anything else is a command
        let result = if handlers::is_component_id(input) {
            handlers::handle_component(catalog, session, input).map(Reply::Screen)
        } else {
            commands::handle_command(catalog, session, input)
        };

        match result {
            Ok(Reply::Screen(text)) => writeln!(stdout, "{}", text)?,
            Ok(Reply::Quit) => break,
            Err(e) => {
                warn!("Interaction '{}' failed: {}", input, e);
                writeln!(stdout, "{}", e)?;
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    info!("Session {} ended", session.id());
    Ok(())
}
