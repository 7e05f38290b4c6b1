use metafib::slow::is_slow;

use super::join_terms;

pub fn run(j: i64, terms: &[i64]) -> Result<(), Box<dyn std::error::Error>> {
    if j < 1 {
        return Err("j must be at least 1".into());
    }
    let stripped = if terms[0] <= 0 { &terms[1..] } else { terms };
    if stripped.is_empty() {
        return Err("input sequence has no terms after its sentinel".into());
    }
    let mut seq = vec![0_i64];
    seq.extend(stripped);
    if let Some(n) = is_slow(&seq) {
        return Err(format!("input sequence is not slow (first bad step at term {n})").into());
    }

    let y = metafib::psi::psi(j, stripped);
    println!("psi_{j} over {} terms:", stripped.len());
    println!("{}", join_terms(&y[1..]));
    Ok(())
}
