/// Splits a comma-separated form field into its trimmed, non-empty items.
///
/// `""` and whitespace-only input produce an empty list.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
