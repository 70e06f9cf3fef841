/// Renders one integer per line, newline-joined.
///
/// No trailing newline beyond what the join produces; an empty slice
/// yields an empty string.
pub fn format_output(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
