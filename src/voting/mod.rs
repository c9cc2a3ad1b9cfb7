pub mod poll;
pub mod prediction;
pub mod rating;

/// One option of a group as the aggregator sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally<'a> {
    pub option_id: &'a str,
    pub label: &'a str,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Prediction,
    Poll,
}

/// A group of mutually exclusive options with fixture-supplied counts.
///
/// Predictions and polls both implement this, so percentage display and
/// open/closed gating are written once.
pub trait Votable {
    fn kind(&self) -> GroupKind;
    fn group_id(&self) -> &str;
    fn is_open(&self) -> bool;
    fn tallies(&self) -> Vec<Tally<'_>>;

    fn has_option(&self, option_id: &str) -> bool {
        self.tallies().iter().any(|t| t.option_id == option_id)
    }
}

// Display results for a group, options kept in fixture order
#[derive(Debug, Clone)]
pub struct GroupResults {
    pub total: u128,
    pub counts: Vec<VoteCount>,
    pub leader_id: Option<String>,
}

impl GroupResults {
    pub fn has_votes(&self) -> bool {
        self.total > 0
    }

    pub fn percent_of(&self, option_id: &str) -> Option<u8> {
        self.counts
            .iter()
            .find(|c| c.option_id == option_id)
            .map(|c| c.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCount {
    pub option_id: String,
    pub option_text: String,
    pub votes: u64,
    pub percent: u8,
}

/// Share of `count` in `total`, rounded half up to a whole percent.
///
/// A zero total yields 0 for every option rather than an undefined value.
pub fn compute_share_percent(count: u64, total: u64) -> u8 {
    wide_share_percent(count as u128, total as u128)
}

// Totals of several u64 counts can exceed u64, so the aggregator works in u128
pub(crate) fn wide_share_percent(count: u128, total: u128) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = count.min(total);
    ((200 * count + total) / (2 * total)) as u8
}

pub fn calculate_results<V: Votable + ?Sized>(group: &V) -> GroupResults {
    let tallies = group.tallies();
    let total: u128 = tallies.iter().map(|t| t.count as u128).sum();

    let mut counts: Vec<VoteCount> = tallies
        .iter()
        .map(|t| VoteCount {
            option_id: t.option_id.to_string(),
            option_text: t.label.to_string(),
            votes: t.count,
            percent: wide_share_percent(t.count as u128, total),
        })
        .collect();

    // A two-sided prediction always reads as a 100% split
    if group.kind() == GroupKind::Prediction && counts.len() == 2 && total > 0 {
        counts[1].percent = 100 - counts[0].percent;
    }

    // No leader when nobody voted or the top count is shared
    let max_votes = counts.iter().map(|c| c.votes).max().unwrap_or(0);
    let leaders: Vec<&VoteCount> = counts.iter().filter(|c| c.votes == max_votes).collect();
    let leader_id = if total > 0 && leaders.len() == 1 {
        Some(leaders[0].option_id.clone())
    } else {
        None
    };

    GroupResults {
        total,
        counts,
        leader_id,
    }
}

/// Horizontal bar for a percentage, `width` cells wide.
pub fn percent_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
