use regex::Regex;
use std::sync::LazyLock;

static HUNK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@@[+\-, 0-9]*@@").expect("hunk marker pattern is valid"));

/// One file's worth of diff output: the path taken from its header and
/// everything up to the next header.
#[derive(Debug, PartialEq, Eq)]
pub struct FileBlock<'a> {
    pub path: &'a str,
    pub body: &'a str,
}

/// Split `raw` into per-file blocks.
///
/// `header` must match a whole file header and `path_of` picks the path out of
/// that match. Text before the first header belongs to no file and is dropped.
pub fn file_blocks<'a>(
    raw: &'a str,
    header: &Regex,
    path_of: impl Fn(&regex::Captures<'a>) -> Option<&'a str>,
) -> Vec<FileBlock<'a>> {
    let headers: Vec<_> = header.captures_iter(raw).collect();
    let mut blocks = Vec::with_capacity(headers.len());

    for (i, caps) in headers.iter().enumerate() {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let body_end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(raw.len());

        let Some(path) = path_of(caps).filter(|p| !p.is_empty()) else {
            continue;
        };

        blocks.push(FileBlock {
            path,
            body: &raw[whole.end()..body_end],
        });
    }

    blocks
}

/// Old-side start line of every hunk marker in `body`, in order of appearance.
pub fn hunk_start_lines(body: &str) -> Vec<u32> {
    HUNK_MARKER
        .find_iter(body)
        .filter_map(|m| marker_start_line(m.as_str()))
        .collect()
}

/// `@@ -12,7 +12,8 @@` -> 12. `None` if the old-side range is missing or not a number.
pub fn marker_start_line(marker: &str) -> Option<u32> {
    let inner = marker.trim_start_matches('@').trim_end_matches('@');
    let old_range = inner.split_whitespace().next()?.strip_prefix('-')?;
    old_range.split(',').next()?.parse().ok()
}
