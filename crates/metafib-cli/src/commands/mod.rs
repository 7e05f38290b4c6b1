pub mod check;
pub mod compute;
pub mod conway;
pub mod ics;
pub mod psi;

/// Renders a 1-indexed buffer's terms as a space-separated line.
pub fn join_terms(terms: &[i64]) -> String {
    terms
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Seeds a fresh V_{s,j} buffer of `terms + 1` slots, returning it with
/// the first non-IC index, or an error for invalid parameters.
pub fn seeded_buffer(
    s: i64,
    j: i64,
    terms: usize,
) -> Result<(Vec<i64>, usize), Box<dyn std::error::Error>> {
    let ics = metafib::ics::get_ics(s, j).ok_or_else(|| {
        format!("invalid parameters: s must be a non-negative multiple of j (s = {s}, j = {j})")
    })?;
    if terms <= ics.len() {
        return Err(format!(
            "terms must exceed the {}-term initial-condition prefix",
            ics.len()
        )
        .into());
    }
    let mut v = vec![0_i64; terms + 1];
    v[0] = metafib::ics::IC_SENTINEL;
    v[1..=ics.len()].copy_from_slice(&ics);
    Ok((v, ics.len() + 1))
}
