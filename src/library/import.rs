//! Import heuristics for user content
//!
//! Mirrors what the dashboard's import form does: a YouTube link becomes a
//! video item keyed by its video id (the part after `v=`), any other link is
//! kept whole, and a file name is treated as a PDF. Imports with an empty key
//! field are silently ignored, same convention as adding an empty memory card.

use log::debug;

use super::models::{ItemKind, StudyItem};

/// Build a study item from a pasted URL
///
/// Returns `None` (no item) when the URL is empty.
pub fn item_from_link(url: &str, title: Option<&str>) -> Option<StudyItem> {
    let url = url.trim();
    if url.is_empty() {
        debug!("ignoring import with empty url");
        return None;
    }

    let is_youtube = url.contains("youtube");
    let kind = if is_youtube { ItemKind::Video } else { ItemKind::Link };

    // A watch URL carries the video id after "v="
    let source = match url.split_once("v=") {
        Some((_, id)) => id.split('&').next().unwrap_or(id).to_string(),
        None => url.to_string(),
    };

    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("New Link")
        .to_string();

    let mut item = StudyItem::new(title, kind);
    item.source = Some(source);
    Some(item)
}

/// Build a study item from an uploaded file name
pub fn item_from_file(file_name: &str, title: Option<&str>) -> Option<StudyItem> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        debug!("ignoring import with empty file name");
        return None;
    }

    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(file_name)
        .to_string();

    Some(StudyItem::new(title, ItemKind::Pdf))
}

/// Case-insensitive title/category filter for the search bar
pub fn filter_items<'a>(items: &'a [StudyItem], query: &str) -> Vec<&'a StudyItem> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|i| {
            i.title.to_lowercase().contains(&query)
                || i.category.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_link_becomes_video_with_id() {
        let item = item_from_link(
            "https://www.youtube.com/watch?v=HXV3zeQKqGY&t=12",
            Some("SQL course"),
        )
        .unwrap();

        assert_eq!(item.kind, ItemKind::Video);
        assert_eq!(item.source.as_deref(), Some("HXV3zeQKqGY"));
        assert_eq!(item.title, "SQL course");
    }

    #[test]
    fn test_plain_link_kept_whole() {
        let item = item_from_link("https://example.com/notes", None).unwrap();
        assert_eq!(item.kind, ItemKind::Link);
        assert_eq!(item.source.as_deref(), Some("https://example.com/notes"));
        assert_eq!(item.title, "New Link");
    }

    #[test]
    fn test_empty_url_ignored() {
        assert!(item_from_link("  ", Some("title")).is_none());
    }

    #[test]
    fn test_file_defaults_title_to_name() {
        let item = item_from_file("algebra-notes.pdf", None).unwrap();
        assert_eq!(item.kind, ItemKind::Pdf);
        assert_eq!(item.title, "algebra-notes.pdf");
    }

    #[test]
    fn test_filter_matches_title_and_category() {
        let mut a = StudyItem::new("Complete SQL Course".to_string(), ItemKind::Video);
        a.category = "Tech".to_string();
        let b = StudyItem::new("Organic Chemistry".to_string(), ItemKind::Video);

        let items = vec![a, b];
        assert_eq!(filter_items(&items, "sql").len(), 1);
        assert_eq!(filter_items(&items, "tech").len(), 1);
        assert_eq!(filter_items(&items, "").len(), 2);
        assert_eq!(filter_items(&items, "biology").len(), 0);
    }
}
