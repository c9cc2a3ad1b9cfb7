use crate::models::Poll;
use crate::voting::{GroupKind, Tally, Votable};

impl Votable for Poll {
    fn kind(&self) -> GroupKind {
        GroupKind::Poll
    }

    fn group_id(&self) -> &str {
        &self.id
    }

    fn is_open(&self) -> bool {
        self.is_open
    }

    fn tallies(&self) -> Vec<Tally<'_>> {
        self.options
            .iter()
            .map(|option| Tally {
                option_id: &option.id,
                label: &option.text,
                count: option.votes,
            })
            .collect()
    }
}

impl Poll {
    pub fn option_text(&self, option_id: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.id == option_id)
            .map(|option| option.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PollOption, PollType};
    use crate::voting::calculate_results;

    fn stipulation_poll() -> Poll {
        let options = [
            ("o1", "Ladder Match", 3200),
            ("o2", "Steel Cage", 4500),
            ("o3", "Last Man Standing", 2100),
            ("o4", "Inferno Match", 5800),
        ]
        .into_iter()
        .map(|(id, text, votes)| PollOption {
            id: id.to_string(),
            text: text.to_string(),
            votes,
        })
        .collect();

        Poll {
            id: "poll1".to_string(),
            question: "Which stipulation for the rematch?".to_string(),
            options,
            is_open: true,
            kind: PollType::MatchType,
            deadline: "Closes Nov 1".to_string(),
        }
    }

    #[test]
    fn options_keep_fixture_order() {
        let poll = stipulation_poll();
        let results = calculate_results(&poll);
        let ids: Vec<&str> = results.counts.iter().map(|c| c.option_id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o2", "o3", "o4"]);
        let percents: Vec<u8> = results.counts.iter().map(|c| c.percent).collect();
        assert_eq!(percents, vec![21, 29, 13, 37]);
    }

    #[test]
    fn option_lookup() {
        let poll = stipulation_poll();
        assert_eq!(poll.option_text("o3"), Some("Last Man Standing"));
        assert_eq!(poll.option_text("o9"), None);
        assert!(poll.has_option("o4"));
    }
}
