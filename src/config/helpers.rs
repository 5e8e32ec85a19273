/// Locate the line defining `option` inside `[section]` in the raw text,
/// for error enhancement. Returns `(0, "<option not found>")` when absent.
///
/// This is a best-effort scan over structural lines only; continuation
/// lines of multi-line values never look like `key =` since they start
/// with whitespace.
pub(super) fn find_option_line(section: &str, option: &str, raw_content: &str) -> (usize, String) {
    let header = format!("[{}]", section);
    let mut in_section = false;

    for (idx, line) in raw_content.lines().enumerate() {
        if line.starts_with('[') {
            in_section = line == header;
            continue;
        }
        if !in_section || line.is_empty() || line.starts_with('#') {
            continue;
        }
        let key = match line.split_once('=') {
            Some((k, _)) => k.trim_end(),
            None => continue,
        };
        if key == option {
            return (idx + 1, line.to_string());
        }
    }

    (0, "<option not found>".into())
}
