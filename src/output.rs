//! Human-readable output formatting

use crate::link::LinkTable;
use std::path::Path;

/// Progress line printed while extracting
pub fn progress_line(index: usize, total: usize, name: &str) -> String {
    format!("[{}/{}] {}", index, total, name)
}

/// One block per design record with its linked measurements
pub fn format_links(table: &LinkTable) -> String {
    let mut output = String::new();

    if table.is_empty() {
        output.push_str("No design records to link\n");
        return output;
    }

    for (design, entry) in table.iter() {
        output.push_str(design);
        output.push('\n');
        if entry.measurements.is_empty() {
            output.push_str("    (no measurements)\n");
        }
        for name in &entry.measurements {
            output.push_str(&format!("    {}\n", name));
        }
    }

    let linked = table.iter().filter(|(_, e)| !e.measurements.is_empty()).count();
    output.push_str(&format!(
        "\nLinked {} of {} design records\n",
        linked,
        table.len()
    ));
    output
}

/// One-line summary after a catalog is written
pub fn format_saved(kind: &str, count: usize, path: &Path) -> String {
    format!("Saved {} {} records to {}", count, kind, path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkEntry;

    #[test]
    fn test_format_links() {
        let mut table = LinkTable::new();
        table.insert_named(
            "MPS_A.mpar".into(),
            LinkEntry {
                measurements: vec!["m1.rpar".into(), "m2.rpar".into()],
            },
        );
        table.insert_named("MPS_B.mpar".into(), LinkEntry::default());

        let text = format_links(&table);
        assert!(text.starts_with("MPS_A.mpar\n    m1.rpar\n    m2.rpar\nMPS_B.mpar\n    (no measurements)\n"));
        assert!(text.ends_with("Linked 1 of 2 design records\n"));
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(progress_line(3, 10, "a.mpar"), "[3/10] a.mpar");
    }
}
