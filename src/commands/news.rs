use crate::catalog::Catalog;
use crate::error::AppError;

pub fn render_screen(catalog: &Catalog) -> String {
    let mut screen = String::from("NEWS\n\n");
    for article in &catalog.news {
        screen.push_str(&format!(
            "[{}] {}\n  {}\n  {}  (open_news_{})\n",
            article.category, article.date, article.title, article.excerpt, article.id
        ));
    }
    screen
}

pub fn render_detail(catalog: &Catalog, article_id: &str) -> Result<String, AppError> {
    let article = catalog.article(article_id)?;
    let mut detail = format!(
        "[{}] {}\n{}\n\n{}\n",
        article.category, article.date, article.title, article.content
    );
    let related = catalog.related_news(article_id);
    if !related.is_empty() {
        detail.push_str("\nRELATED NEWS\n");
        for item in related {
            detail.push_str(&format!("  {}  (open_news_{})\n", item.title, item.id));
        }
    }
    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_lists_related() {
        let catalog = Catalog::embedded().unwrap();
        let detail = render_detail(&catalog, "6").unwrap();
        assert!(detail.contains("PHOENIX RETURNS FROM INJURY"));
        assert_eq!(detail.matches("(open_news_").count(), 3);
        assert!(!detail.contains("open_news_6"));
    }

    #[test]
    fn missing_article() {
        let catalog = Catalog::embedded().unwrap();
        assert!(render_detail(&catalog, "42").is_err());
    }
}
