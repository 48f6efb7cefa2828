//! Output formatting for CLI display
//!
//! Renders the view projections as plain terminal lines, plus the CSV
//! export of a result page.

use crate::api::{PageInfo, Record};
use crate::view::{FactContent, FeatureView, PageControl, ResultEntry, ResultList};
use colored::Colorize;
use std::io::Write;

/// Format a pagination control, dimmed when disabled
#[must_use]
pub fn page_control(control: &PageControl<'_>) -> String {
    let label = format!("[{}]", control.label());
    if control.is_disabled() {
        label.dimmed().to_string()
    } else {
        label.bold().to_string()
    }
}

/// Format one result row
#[must_use]
pub fn result_entry(entry: &ResultEntry<'_>, quiet: bool) -> String {
    if quiet {
        return entry.heading.to_string();
    }

    let marker = if entry.image.is_some() { "▣" } else { " " };
    let mut line = format!("{:>4}. {} {}", entry.index + 1, marker, entry.heading);
    if let Some(dated) = entry.record.dated.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" ({})", dated.dimmed()));
    }
    line
}

/// "Page X of Y, N records" from whatever counters the API returned
#[must_use]
pub fn page_summary(info: &PageInfo) -> Option<String> {
    match (info.page, info.pages, info.totalrecords) {
        (Some(page), Some(pages), Some(total)) => {
            Some(format!("Page {page} of {pages}, {total} records"))
        }
        (Some(page), Some(pages), None) => Some(format!("Page {page} of {pages}")),
        (_, _, Some(total)) => Some(format!("{total} records")),
        _ => None,
    }
}

/// Render a result page: controls, summary, then one line per record
#[must_use]
pub fn result_list(list: &ResultList<'_>, info: &PageInfo, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if !quiet {
        let mut header = format!("{} {}", page_control(&list.previous()), page_control(&list.next()));
        if let Some(summary) = page_summary(info) {
            header.push_str(&format!("  {}", summary.dimmed()));
        }
        lines.push(header);
    }

    if list.is_empty() && !quiet {
        lines.push("  No records".dimmed().to_string());
    }

    lines.extend(list.entries().iter().map(|entry| result_entry(entry, quiet)));
    lines
}

/// Render the feature view
///
/// Searchable values are underlined and followed by the term they search.
#[must_use]
pub fn feature(view: &FeatureView) -> Vec<String> {
    let FeatureView::Object(object) = view else {
        return Vec::new();
    };

    let mut lines = vec![object.title.bold().to_string(), object.dated.dimmed().to_string()];

    let width = object
        .facts
        .iter()
        .map(|fact| fact.title.len())
        .max()
        .unwrap_or_default();

    if !object.facts.is_empty() {
        lines.push(String::new());
    }

    for fact in &object.facts {
        let title = format!("{:<width$}", fact.title);
        let content = match &fact.content {
            FactContent::Text(text) => text.clone(),
            FactContent::Search(trigger) => format!(
                "{} {}",
                trigger.label().cyan().underline(),
                format!("[{}]", trigger.search_term()).dimmed()
            ),
        };
        lines.push(format!("  {}  {}", title.dimmed(), content));
    }

    if let Some(photos) = &object.photos {
        lines.push(String::new());
        lines.push("Photos".bold().to_string());
        for photo in photos {
            match photo.alt.as_deref().filter(|alt| !alt.is_empty()) {
                Some(alt) => lines.push(format!("  {} {}", photo.src, format!("({alt})").dimmed())),
                None => lines.push(format!("  {}", photo.src)),
            }
        }
    }

    lines
}

/// Write records as CSV with a fixed set of columns
///
/// # Errors
///
/// Returns `csv::Error` if writing fails.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "id",
        "objectnumber",
        "title",
        "dated",
        "culture",
        "medium",
        "primaryimageurl",
        "url",
    ])?;

    for record in records {
        let id = record.id.map(|id| id.to_string()).unwrap_or_default();
        csv.write_record([
            id.as_str(),
            record.objectnumber.as_deref().unwrap_or_default(),
            record.title.as_deref().unwrap_or_default(),
            record.dated.as_deref().unwrap_or_default(),
            record.culture.as_deref().unwrap_or_default(),
            record.medium.as_deref().unwrap_or_default(),
            record.primaryimageurl.as_deref().unwrap_or_default(),
            record.url.as_deref().unwrap_or_default(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SearchResponse;
    use crate::testing::{full_record, titled};
    use crate::view::FeatureDetail;

    #[test]
    fn test_page_summary() {
        let info = PageInfo {
            page: Some(2),
            pages: Some(5),
            totalrecords: Some(48),
            ..PageInfo::default()
        };
        assert_eq!(page_summary(&info).as_deref(), Some("Page 2 of 5, 48 records"));
        assert_eq!(page_summary(&PageInfo::default()), None);
    }

    #[test]
    fn test_quiet_result_list_prints_headings_only() {
        let results = SearchResponse::new(
            PageInfo::default(),
            vec![titled("Vase"), Record::default()],
        );
        let list = ResultList::new(&results);
        let lines = result_list(&list, &results.info, true);
        assert_eq!(lines, vec!["Vase".to_string(), "MISSING INFO".to_string()]);
    }

    #[test]
    fn test_result_list_has_header_and_rows() {
        colored::control::set_override(false);
        let results = SearchResponse::new(
            PageInfo {
                next: Some("url2".into()),
                ..PageInfo::default()
            },
            vec![titled("Vase")],
        );
        let list = ResultList::new(&results);
        let lines = result_list(&list, &results.info, false);

        assert_eq!(lines[0], "[Previous] [Next]");
        assert_eq!(lines[1], "   1.   Vase");
    }

    #[test]
    fn test_feature_lines() {
        colored::control::set_override(false);
        let record = full_record();
        let lines = feature(&FeatureDetail::project(Some(&record)));

        assert_eq!(lines[0], "Amphora");
        assert_eq!(lines[1], "c. 520 BCE");
        assert!(lines.iter().any(|l| l.contains("Greek [culture]")));
        assert!(lines.iter().any(|l| l.contains("A, B [person]")));
        assert!(lines.iter().any(|l| l == "  https://img/10 (front)"));
        assert!(!lines.iter().any(|l| l.contains("https://img/primary")));
    }

    #[test]
    fn test_feature_empty() {
        assert!(feature(&FeatureView::Empty).is_empty());
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&[full_record(), Record::default()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,objectnumber,title"));
        assert!(lines[1].starts_with("1,1925.30.1,Amphora,c. 520 BCE,Greek,Terracotta"));
        assert_eq!(lines[2], ",,,,,,,");
    }
}
