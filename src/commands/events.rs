use crate::catalog::Catalog;
use crate::models::Event;

fn render_row(event: &Event) -> String {
    let action = if event.is_past { "RESULTS" } else { "TICKETS" };
    format!(
        "{} {}  {} {}\n  {}\n  [{}] (open_event_{})\n",
        event.month, event.day, event.title, event.subtitle, event.location, action, event.id
    )
}

pub fn render_screen(catalog: &Catalog) -> String {
    let mut screen = String::from("EVENTS\n\nUPCOMING EVENTS\n");
    let upcoming = catalog.upcoming_events();
    if upcoming.is_empty() {
        screen.push_str("  Nothing scheduled\n");
    }
    for event in upcoming {
        screen.push_str(&render_row(event));
    }
    screen.push_str("\nPAST EVENTS\n");
    for event in catalog.past_events() {
        screen.push_str(&render_row(event));
    }
    screen
}

pub fn render_detail(event: &Event) -> String {
    let mut detail = format!(
        "{}\n{}\n\n{}\n{}\n{}\n",
        event.title, event.subtitle, event.date, event.venue, event.location
    );
    if let Some(main_event) = &event.main_event {
        detail.push_str(&format!("\nMAIN EVENT\n  {}\n", main_event));
    }
    if event.is_past {
        detail.push_str("\nThis event has concluded. Check the news for results.\n");
    } else {
        detail.push_str("\n[GET TICKETS]\n");
    }
    detail
}
