use crate::catalog::Catalog;
use crate::models::Wrestler;

pub fn render_screen(catalog: &Catalog, query: &str) -> String {
    let wrestlers = catalog.search_roster(query);
    let mut screen = String::from("ROSTER\n");
    if !query.trim().is_empty() {
        screen.push_str(&format!("Search: {}\n", query.trim()));
    }
    screen.push('\n');
    if wrestlers.is_empty() {
        screen.push_str("No wrestlers found\n");
    }
    for wrestler in wrestlers {
        let belt = if wrestler.is_champion { " 🏆" } else { "" };
        screen.push_str(&format!(
            "{}{}\n  {}  (open_wrestler_{})\n",
            wrestler.name, belt, wrestler.role, wrestler.id
        ));
    }
    screen
}

pub fn render_detail(wrestler: &Wrestler) -> String {
    let mut detail = String::new();
    if let Some(nickname) = &wrestler.nickname {
        detail.push_str(&format!("\"{}\"\n", nickname));
    }
    detail.push_str(&format!("{}\n{}\n\n", wrestler.name, wrestler.role));
    detail.push_str(&format!(
        "Record: {} ({}% wins)\nHeight: {}\nWeight: {}\nHometown: {}\nFinisher: {}\n\n",
        wrestler.record(),
        wrestler.win_percent(),
        wrestler.height,
        wrestler.weight,
        wrestler.hometown,
        wrestler.finisher
    ));
    if !wrestler.championships.is_empty() {
        detail.push_str("CHAMPIONSHIPS\n");
        for title in &wrestler.championships {
            detail.push_str(&format!("  {}\n", title));
        }
        detail.push('\n');
    }
    detail.push_str("BIOGRAPHY\n");
    detail.push_str(&wrestler.bio);
    detail.push('\n');
    detail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_says_so() {
        let catalog = Catalog::embedded().unwrap();
        assert!(render_screen(&catalog, "nobody").contains("No wrestlers found"));
        assert!(render_screen(&catalog, "viper").contains("open_wrestler_3"));
    }

    #[test]
    fn champion_detail_lists_titles() {
        let catalog = Catalog::embedded().unwrap();
        let detail = render_detail(catalog.wrestler("1").unwrap());
        assert!(detail.contains("\"The Inferno\""));
        assert!(detail.contains("Record: 47-8 (85% wins)"));
        assert!(detail.contains("IWA Heavyweight Championship"));
    }
}
