/// Prefixes that turn a whole line into a comment.
pub const COMMENT_PREFIXES: [&str; 3] = ["//", "/*", "--"];

/// Trim every line and drop blank and comment lines, keeping order.
///
/// Comments are line-level only: `print a // b` prints `a // b`.
pub fn clean<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    clean_numbered(lines)
        .into_iter()
        .map(|(_, line)| line)
        .collect()
}

/// [`clean`], with each surviving line paired with its 1-based line number
/// in the original input.
pub fn clean_numbered<'a, I>(lines: I) -> Vec<(usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !is_comment(line))
        .collect()
}

pub fn is_comment(line: &str) -> bool {
    COMMENT_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}
