//! Markdown rendering of collected changeset entries.
use crate::changeset::types::ChangesetEntries;

/// Render entries as a changelog section.
///
/// The section starts with `date_header`, followed by one `### <display name>`
/// block per release holding its formatted changeset lines. Unknown changesets
/// are skipped.
pub fn render_changelog(date_header: &str, entries: &ChangesetEntries) -> String {
    let mut sections = vec![date_header.to_string()];

    for summary in entries.summary.iter() {
        let mut section = format!("### {}", summary.display_name);

        let lines = summary
            .changesets
            .iter()
            .flatten()
            .map(|line| line.trim_end())
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>();

        if !lines.is_empty() {
            section.push_str("\n\n");
            section.push_str(&lines.join("\n"));
        }

        sections.push(section);
    }

    format!("{}\n", sections.join("\n\n"))
}
