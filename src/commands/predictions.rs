use crate::catalog::Catalog;
use crate::models::{Poll, Prediction};
use crate::reporter::VoteReporter;
use crate::session::Session;
use crate::voting::{calculate_results, percent_bar, Votable};

const BAR_WIDTH: usize = 20;

fn status_badge(is_open: bool) -> &'static str {
    if is_open { "OPEN" } else { "CLOSED" }
}

pub fn render_prediction_card<R: VoteReporter>(session: &Session<R>, prediction: &Prediction) -> String {
    let results = calculate_results(prediction);
    let picked = session.selection(prediction);

    let mut card = format!(
        "{} [{}]\n{}\n",
        prediction.match_title,
        status_badge(prediction.is_open),
        prediction.deadline
    );
    for count in &results.counts {
        let marker = if picked == Some(count.option_id.as_str()) { ">" } else { " " };
        card.push_str(&format!(
            "{} {:<16} {} {:>3}%\n",
            marker,
            count.option_text,
            percent_bar(count.percent, BAR_WIDTH),
            count.percent
        ));
    }
    if session.shows_confirmation(prediction) {
        card.push_str("✓ Your prediction has been recorded\n");
    } else if prediction.is_open {
        card.push_str(&format!(
            "  vote: predict_{}_1 | predict_{}_2\n",
            prediction.id, prediction.id
        ));
    }
    card
}

pub fn render_poll_card<R: VoteReporter>(session: &Session<R>, poll: &Poll) -> String {
    let results = calculate_results(poll);
    let picked = session.selection(poll);

    let mut card = format!(
        "{} [{}]\n{}\n{}\n",
        poll.kind.label(),
        status_badge(poll.is_open),
        poll.question,
        poll.deadline
    );
    for count in &results.counts {
        let marker = if picked == Some(count.option_id.as_str()) { ">" } else { " " };
        card.push_str(&format!(
            "{} {:<20} {} {:>3}%",
            marker,
            count.option_text,
            percent_bar(count.percent, BAR_WIDTH),
            count.percent
        ));
        if results.leader_id.as_deref() == Some(count.option_id.as_str()) {
            card.push_str(" ▲");
        }
        if poll.is_open {
            card.push_str(&format!("  (poll_{}_{})", poll.id, count.option_id));
        }
        card.push('\n');
    }
    if !results.has_votes() {
        card.push_str("  No votes yet\n");
    } else {
        card.push_str(&format!("  {} votes\n", results.total));
    }
    if session.shows_confirmation(poll) {
        card.push_str("✓ Your vote has been recorded\n");
    }
    card
}

pub fn render_screen<R: VoteReporter>(catalog: &Catalog, session: &Session<R>) -> String {
    let mut screen = String::from("PREDICTIONS\nMake your picks and vote in polls\n\nMATCH PREDICTIONS\n\n");
    for prediction in &catalog.predictions {
        screen.push_str(&render_prediction_card(session, prediction));
        screen.push('\n');
    }
    screen.push_str("FAN POLLS\n\n");
    for poll in &catalog.polls {
        screen.push_str(&render_poll_card(session, poll));
        screen.push('\n');
    }
    screen
}

// Shown as a teaser on the home screen
pub fn open_group_count(catalog: &Catalog) -> usize {
    catalog.predictions.iter().filter(|p| p.is_open()).count()
        + catalog.polls.iter().filter(|p| p.is_open()).count()
}
