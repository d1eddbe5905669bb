/// Join class lists, dropping empty entries and collapsing whitespace.
pub fn cn(classes: &[&str]) -> String {
    classes
        .iter()
        .flat_map(|c| c.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `base` followed by an optional caller-supplied hook.
#[inline]
pub fn cn_with(base: &str, extra: Option<&str>) -> String {
    cn(&[base, extra.unwrap_or("")])
}
