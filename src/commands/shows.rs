use crate::catalog::Catalog;
use crate::models::{Show, ShowMatch};
use crate::reporter::VoteReporter;
use crate::session::Session;
use crate::voting::rating::star_row;

pub fn render_match_row<R: VoteReporter>(session: &Session<R>, show_match: &ShowMatch) -> String {
    format!(
        "  {}\n  {}\n  ★ {}\n  Your rating: {}  (rate_{}_<1-5>)\n",
        show_match.title,
        show_match.participants.join(" vs. "),
        show_match.aggregate_label(),
        star_row(session.rating(&show_match.id)),
        show_match.id
    )
}

pub fn render_show_card<R: VoteReporter>(session: &Session<R>, show: &Show) -> String {
    let expanded = session.is_expanded(&show.id);
    let mut card = format!(
        "{}\n{} | {} | {} matches\n",
        show.title,
        show.date,
        show.venue,
        show.matches.len()
    );
    if expanded {
        card.push_str(&format!("[HIDE MATCHES] (expand_{})\n", show.id));
        for show_match in &show.matches {
            card.push_str(&render_match_row(session, show_match));
        }
    } else {
        card.push_str(&format!("[VIEW MATCHES & RATE] (expand_{})\n", show.id));
    }
    card
}

pub fn render_screen<R: VoteReporter>(catalog: &Catalog, session: &Session<R>) -> String {
    let mut screen = String::from("SHOWS\nWatch and rate past shows\n\n");
    for show in &catalog.shows {
        screen.push_str(&render_show_card(session, show));
        screen.push('\n');
    }
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::testing::RecordingReporter;

    #[test]
    fn matches_only_render_when_expanded() {
        let catalog = Catalog::embedded().unwrap();
        let mut session = Session::new(RecordingReporter::default());
        let show = catalog.show("s1").unwrap();

        let collapsed = render_show_card(&session, show);
        assert!(collapsed.contains("VIEW MATCHES & RATE"));
        assert!(!collapsed.contains("Your rating"));

        session.toggle_expanded(show);
        session.record_local_rating(show, &show.matches[0], 3).unwrap();
        session.record_local_rating(show, &show.matches[0], 5).unwrap();
        let expanded = render_show_card(&session, show);
        assert!(expanded.contains("HIDE MATCHES"));
        assert!(expanded.contains("Your rating: ★★★★★"));
        assert!(expanded.contains("4.7 (1284 ratings)"));
    }
}
