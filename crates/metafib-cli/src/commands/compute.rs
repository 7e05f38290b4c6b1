use metafib::recurrence::{ComputeMode, compute_vseq};
use metafib::slow::is_slow;

use super::{join_terms, seeded_buffer};

pub fn run(
    s: i64,
    j: i64,
    terms: usize,
    only_if_slow: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut v, first) = seeded_buffer(s, j, terms)?;
    let mode = if only_if_slow {
        ComputeMode::ONLY_IF_SLOW | ComputeMode::TOLERANT
    } else {
        ComputeMode::UNCONDITIONAL
    };
    let last = compute_vseq(&mut v, s, j, first, mode)?;

    println!("V_{{{s},{j}}} through index {last}:");
    println!("{}", join_terms(&v[1..=last]));
    match is_slow(&v[..=last]) {
        None => println!("slow throughout"),
        Some(n) => println!("first non-slow step at index {n}"),
    }
    Ok(())
}
