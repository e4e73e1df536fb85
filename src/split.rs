/// Splits on every non-overlapping occurrence of `separator`, scanning left to
/// right. Empty pieces are kept. An empty separator yields the source unchanged.
pub fn split(source: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return vec![source.to_string()];
    }
    source.split(separator).map(str::to_string).collect()
}
