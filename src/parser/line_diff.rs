use super::annotation::{Annotation, AnnotationSet, Severity};
use super::diff::{file_blocks, hunk_start_lines};
use regex::Regex;
use std::sync::LazyLock;

// The `diff --git` line; group 1 is its `b/` side, used when a block has no `+++` line.
static FILE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^diff --git (?:[^\n]*? b/)?([^\n]*)\n")
        .expect("git diff header pattern is valid")
});

/// Parse `git diff` output: one annotation per hunk, message prefixed with `title`.
///
/// Extended header lines (`new file mode`, `similarity index`, renames) may sit
/// between `diff --git` and the first hunk. Blocks whose new side is
/// `/dev/null` are deleted files and produce nothing.
pub fn parse(raw: &str, title: &str) -> AnnotationSet {
    let message = format!("{}: Error found starting here.", title);

    file_blocks(raw, &FILE_HEADER, |caps| caps.get(1).map(|m| m.as_str()))
        .into_iter()
        .filter_map(|block| {
            let path = match plus_line(block.body) {
                Some(line) => new_side_path(line)?,
                None => block.path,
            };
            Some((path, block.body))
        })
        .flat_map(|(path, body)| {
            let message = &message;
            hunk_start_lines(body)
                .into_iter()
                .map(move |line| Annotation::new(path, line, message.as_str(), Severity::High))
        })
        .collect()
}

/// The `+++` line of a block's header, if it has one before the first hunk.
fn plus_line(body: &str) -> Option<&str> {
    body.lines()
        .take_while(|line| !line.starts_with("@@"))
        .find(|line| line.starts_with("+++ "))
}

/// `+++ b/src/lib.rs` -> `src/lib.rs`. Deleted files (`+++ /dev/null`) have
/// no path to annotate. Other lines lose their first six characters, the
/// width of `+++ b/`.
fn new_side_path(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line == "+++ /dev/null" {
        return None;
    }
    if let Some(path) = line.strip_prefix("+++ b/") {
        return Some(path);
    }
    line.char_indices().nth(6).map(|(idx, _)| &line[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_block(path: &str, line: u32) -> String {
        format!(
            "\ndiff --git a/{path}\nindex commitone..committwo 100644\n--- a/{path}\n+++ b/{path}\n@@ -{line},7 +{line},8 @@ public final class SecondChangedClass extends UnchangedClass\n         return null;\n                "
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("", "Git Report").is_empty());
    }

    #[test]
    fn test_path_and_line_extraction() {
        let raw = "diff --git a/x/y.c b/x/y.c\nindex 1111111..2222222 100644\n--- a/x/y.c\n+++ b/x/y.c\n@@ -5,7 +5,8 @@ int main(void)\n context\n";
        let set = parse(raw, "Diff");

        assert_eq!(set.len(), 1);
        let annotation = &set.annotations[0];
        assert_eq!(annotation.path(), "x/y.c");
        assert_eq!(annotation.line(), 5);
        assert_eq!(annotation.severity(), Severity::High);
        assert_eq!(annotation.message(), "Diff: Error found starting here.");
    }

    #[test]
    fn test_multiple_files() {
        let raw = [
            git_block("test/some/class.c", 5),
            git_block("test/some/other/class.c", 146),
        ]
        .join("\n");

        let set = parse(&raw, "Git Report");

        let expected = AnnotationSet::new(vec![
            Annotation::new(
                "test/some/class.c",
                5,
                "Git Report: Error found starting here.",
                Severity::High,
            ),
            Annotation::new(
                "test/some/other/class.c",
                146,
                "Git Report: Error found starting here.",
                Severity::High,
            ),
        ]);
        assert_eq!(set, expected);
    }

    #[test]
    fn test_several_hunks_per_file() {
        let raw = "diff --git a/lib.rs b/lib.rs\nindex 1..2 100644\n--- a/lib.rs\n+++ b/lib.rs\n@@ -1,3 +1,4 @@\n+use std::fs;\n@@ -20,6 +21,6 @@ fn run()\n-a\n+b\ndiff --git a/main.rs b/main.rs\nindex 3..4 100644\n--- a/main.rs\n+++ b/main.rs\n@@ -8 +8 @@\n-x\n+y\n";
        let set = parse(raw, "t");

        let got: Vec<(&str, u32)> = set.iter().map(|a| (a.path(), a.line())).collect();
        assert_eq!(got, vec![("lib.rs", 1), ("lib.rs", 20), ("main.rs", 8)]);
    }

    #[test]
    fn test_file_without_hunks() {
        let raw = "diff --git a/bin.dat b/bin.dat\nindex 1..2 100644\n--- a/bin.dat\n+++ b/bin.dat\nBinary files differ\n";
        assert!(parse(raw, "t").is_empty());
    }

    #[test]
    fn test_new_file_uses_plus_side() {
        let raw = "diff --git a/src/new.rs b/src/new.rs\nnew file mode 100644\nindex 0000000..3b18e51\n--- /dev/null\n+++ b/src/new.rs\n@@ -0,0 +1,3 @@\n+fn a() {}\n";
        let set = parse(raw, "t");

        let got: Vec<(&str, u32)> = set.iter().map(|a| (a.path(), a.line())).collect();
        assert_eq!(got, vec![("src/new.rs", 0)]);
    }

    #[test]
    fn test_deleted_file_skipped() {
        let raw = "diff --git a/src/old.rs b/src/old.rs\ndeleted file mode 100644\nindex 3b18e51..0000000\n--- a/src/old.rs\n+++ /dev/null\n@@ -1,3 +0,0 @@\n-fn a() {}\ndiff --git a/keep.rs b/keep.rs\nindex 1..2 100644\n--- a/keep.rs\n+++ b/keep.rs\n@@ -4,1 +4,1 @@\n-x\n+y\n";
        let set = parse(raw, "t");

        let got: Vec<(&str, u32)> = set.iter().map(|a| (a.path(), a.line())).collect();
        assert_eq!(got, vec![("keep.rs", 4)]);
    }

    #[test]
    fn test_rename_with_changes() {
        let raw = "diff --git a/src/a.rs b/src/b.rs\nsimilarity index 90%\nrename from src/a.rs\nrename to src/b.rs\nindex 1..2 100644\n--- a/src/a.rs\n+++ b/src/b.rs\n@@ -7,2 +7,2 @@\n-x\n+y\n";
        let set = parse(raw, "t");

        let got: Vec<(&str, u32)> = set.iter().map(|a| (a.path(), a.line())).collect();
        assert_eq!(got, vec![("src/b.rs", 7)]);
    }

    #[test]
    fn test_pure_rename_has_no_hunks() {
        let raw = "diff --git a/a.rs b/b.rs\nsimilarity index 100%\nrename from a.rs\nrename to b.rs\n";
        assert!(parse(raw, "t").is_empty());
    }

    #[test]
    fn test_plus_line_stops_at_first_hunk() {
        assert_eq!(plus_line("index 1..2\n--- a/x\n+++ b/x\n@@ -1 +1 @@\n"), Some("+++ b/x"));
        assert_eq!(plus_line("old mode 100644\nnew mode 100755\n"), None);
        assert_eq!(plus_line("@@ -1 +1 @@\n+++ b/not-a-header\n"), None);
    }

    #[test]
    fn test_new_side_path() {
        assert_eq!(new_side_path("+++ b/src/lib.rs"), Some("src/lib.rs"));
        assert_eq!(new_side_path("+++ b/src/lib.rs\r"), Some("src/lib.rs"));
        assert_eq!(new_side_path("+++ /dev/null"), None);
        assert_eq!(new_side_path("+++ c/odd.rs"), Some("odd.rs"));
        assert_eq!(new_side_path("+++"), None);
    }
}
