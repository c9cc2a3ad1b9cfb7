use crate::models::Prediction;
use crate::voting::{GroupKind, Tally, Votable};

// Sides are addressed as "1" and "2", matching the vote buttons
pub const FIRST_SIDE: &str = "1";
pub const SECOND_SIDE: &str = "2";

impl Votable for Prediction {
    fn kind(&self) -> GroupKind {
        GroupKind::Prediction
    }

    fn group_id(&self) -> &str {
        &self.id
    }

    fn is_open(&self) -> bool {
        self.is_open
    }

    fn tallies(&self) -> Vec<Tally<'_>> {
        vec![
            Tally {
                option_id: FIRST_SIDE,
                label: &self.wrestler1,
                count: self.wrestler1_votes,
            },
            Tally {
                option_id: SECOND_SIDE,
                label: &self.wrestler2,
                count: self.wrestler2_votes,
            },
        ]
    }
}

impl Prediction {
    pub fn side_name(&self, side: &str) -> Option<&str> {
        match side {
            FIRST_SIDE => Some(&self.wrestler1),
            SECOND_SIDE => Some(&self.wrestler2),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voting::calculate_results;

    fn blaze_vs_titan() -> Prediction {
        Prediction {
            id: "p1".to_string(),
            match_title: "IWA Heavyweight Championship".to_string(),
            wrestler1: "BLAZE".to_string(),
            wrestler2: "TITAN".to_string(),
            wrestler1_votes: 4250,
            wrestler2_votes: 3100,
            is_open: true,
            deadline: "Closes Oct 28".to_string(),
        }
    }

    #[test]
    fn both_sides_are_tallied() {
        let prediction = blaze_vs_titan();
        let results = calculate_results(&prediction);
        assert_eq!(results.total, 7350);
        assert_eq!(results.percent_of(FIRST_SIDE), Some(58));
        assert_eq!(results.percent_of(SECOND_SIDE), Some(42));
        assert_eq!(results.leader_id.as_deref(), Some(FIRST_SIDE));
    }

    #[test]
    fn sides_always_sum_to_one_hundred() {
        let mut prediction = blaze_vs_titan();
        prediction.wrestler1_votes = 1;
        prediction.wrestler2_votes = 7;
        let results = calculate_results(&prediction);
        assert_eq!(results.percent_of(FIRST_SIDE), Some(13));
        assert_eq!(results.percent_of(SECOND_SIDE), Some(87));

        prediction.wrestler1_votes = 0;
        prediction.wrestler2_votes = 0;
        let empty = calculate_results(&prediction);
        assert_eq!(empty.percent_of(SECOND_SIDE), Some(0));
    }

    #[test]
    fn side_names() {
        let prediction = blaze_vs_titan();
        assert_eq!(prediction.side_name("2"), Some("TITAN"));
        assert_eq!(prediction.side_name("3"), None);
        assert!(prediction.has_option("1"));
        assert!(!prediction.has_option("BLAZE"));
    }
}
