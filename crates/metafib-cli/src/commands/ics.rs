use metafib::ics::{get_ics, get_min_ics_len};

use super::join_terms;

pub fn run(s: i64, j: i64) -> Result<(), Box<dyn std::error::Error>> {
    let ics = get_ics(s, j).ok_or_else(|| {
        format!("invalid parameters: s must be a non-negative multiple of j (s = {s}, j = {j})")
    })?;

    println!("V_{{{s},{j}}} minimal initial conditions ({} terms):", ics.len());
    println!("{}", join_terms(&ics));
    if let Some(min) = get_min_ics_len(s, j) {
        println!("closed-form minimum length: {min}");
    }
    Ok(())
}
