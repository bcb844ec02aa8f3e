// Mon Oct 19 2026 - Alex

use std::io::{self, Write};

use crate::dispatch::DispatchReport;
use crate::state::StateTree;

/// Renders decoded state for the command line.
pub struct SnapshotFormatter {
    pretty: bool,
}

impl SnapshotFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn render(&self, tree: &StateTree) -> Result<String, serde_json::Error> {
        tree.to_json(self.pretty)
    }

    pub fn write_to<W: Write>(&self, tree: &StateTree, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.render(tree)?)?;
        Ok(())
    }

    pub fn summary(report: &DispatchReport) -> String {
        format!(
            "{} observations: {} applied, {} unknown, {} failed",
            report.total(),
            report.applied,
            report.unknown,
            report.failed
        )
    }
}

impl Default for SnapshotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Value;
    use crate::state::Path;

    #[test]
    fn test_pretty_and_compact() {
        let mut tree = StateTree::new();
        tree.set_path(&Path::root().key("stage"), Value::Int(0x1F)).unwrap();

        assert_eq!(SnapshotFormatter::new().render(&tree).unwrap(), r#"{"stage":31}"#);
        assert!(SnapshotFormatter::new().with_pretty(true).render(&tree).unwrap().contains('\n'));
    }

    #[test]
    fn test_summary() {
        let report = DispatchReport { applied: 3, unknown: 1, failed: 0 };
        assert_eq!(SnapshotFormatter::summary(&report), "4 observations: 3 applied, 1 unknown, 0 failed");
    }
}
