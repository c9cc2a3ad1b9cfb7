pub mod events;
pub mod join;
pub mod news;
pub mod predictions;
pub mod profile;
pub mod roster;
pub mod shows;

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::reporter::VoteReporter;
use crate::session::Session;
use crate::settings;
use join::JoinForm;
use log::info;

const HELP: &str = "\
Screens: home | roster [query] | events | news | predictions | shows | profile
Apply:   join name=<name>;email=<email>[;phone=..;age=..;height=..;weight=..;experience=..;why=..]
Actions: predict_<id>_<1|2> | poll_<id>_<option> | rate_<match>_<1-5> | expand_<show>
         toggle_notifications | toggle_darkmode | open_<wrestler|event|news>_<id>
Other:   help | quit
";

pub enum Reply {
    Screen(String),
    Quit,
}

pub fn handle_command<R: VoteReporter>(
    catalog: &Catalog,
    session: &mut Session<R>,
    line: &str,
) -> Result<Reply, AppError> {
    let (name, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
    info!("Received command: {}", name);

    let screen = match name {
        "home" | "" => render_home(catalog),
        "roster" => roster::render_screen(catalog, rest),
        "events" => events::render_screen(catalog),
        "news" => news::render_screen(catalog),
        "predictions" => predictions::render_screen(catalog, session),
        "shows" => shows::render_screen(catalog, session),
        "profile" => profile::render_screen(settings::current()),
        "join" => JoinForm::parse(rest)?.submit(session)?,
        "help" => HELP.to_string(),
        "quit" | "exit" => return Ok(Reply::Quit),
        other => return Err(AppError::UnknownCommand(other.to_string())),
    };
    Ok(Reply::Screen(screen))
}

pub fn render_home(catalog: &Catalog) -> String {
    let mut screen = String::from("IWA\nINDEPENDENT WRESTLING ALLIANCE\n\n");

    if let Some(event) = catalog.upcoming_events().first() {
        screen.push_str(&format!(
            "NEXT EVENT\n  {} {}\n  {} | {}  (open_event_{})\n\n",
            event.title, event.subtitle, event.date, event.location, event.id
        ));
    }

    let champions = catalog.champions();
    if !champions.is_empty() {
        screen.push_str("CHAMPIONS\n");
        for champion in champions {
            screen.push_str(&format!(
                "  {}: {}\n",
                champion.name,
                champion.championships.join(", ")
            ));
        }
        screen.push('\n');
    }

    screen.push_str("LATEST NEWS\n");
    for article in catalog.news.iter().take(3) {
        screen.push_str(&format!("  {}  (open_news_{})\n", article.title, article.id));
    }

    let open = predictions::open_group_count(catalog);
    if open > 0 {
        screen.push_str(&format!("\n{} predictions and polls are open. Type 'predictions'.\n", open));
    }
    screen
}
