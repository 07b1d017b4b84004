/// Resolve a semantic field to a header index.
///
/// Sheet headers are human-edited and drift between revisions ("RA Level" vs
/// "Risk Level"), so candidates are tried in priority order with exact
/// case-insensitive matches first and substring matches only as a fallback.
/// `None` means the field is absent from this sheet; callers map that to an
/// empty value, never an error.
pub fn resolve(headers: &[String], candidates: &[&str]) -> Option<usize> {
    let lower: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    for candidate in candidates {
        let target = candidate.to_lowercase();
        if let Some(idx) = lower.iter().position(|h| *h == target) {
            return Some(idx);
        }
    }
    for candidate in candidates {
        let target = candidate.to_lowercase();
        if let Some(idx) = lower.iter().position(|h| h.contains(&target)) {
            return Some(idx);
        }
    }
    None
}

/// Cell at the resolved index, or empty when the column is missing or the
/// row is shorter than the header row.
pub fn cell(row: &[String], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i))
        .map(|s| s.to_string())
        .unwrap_or_default()
}
