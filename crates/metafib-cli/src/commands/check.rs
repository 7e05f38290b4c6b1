use metafib::lemmas::check_lemmas;
use metafib::recurrence::{ComputeMode, compute_vseq};
use metafib::slow::{freq_seq, is_slow};

use super::seeded_buffer;

pub fn run(s: i64, j: i64, terms: usize, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if format != "text" && format != "json" {
        return Err(format!("unknown format '{format}' (expected text or json)").into());
    }

    let (mut v, first) = seeded_buffer(s, j, terms)?;
    compute_vseq(&mut v, s, j, first, ComputeMode::UNCONDITIONAL)?;

    let first_break = is_slow(&v);
    let f = freq_seq(&v, 1, v.len())
        .ok_or("sequence contains a negative value; no frequency sequence exists")?;

    let mut violations = Vec::new();
    let all_hold = check_lemmas(&v, s, j, Some(&f), first, &mut violations);

    if format == "json" {
        let report = serde_json::json!({
            "s": s,
            "j": j,
            "terms": terms,
            "first_non_ic": first,
            "first_non_slow_index": first_break,
            "all_hold": all_hold,
            "violations": violations,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match first_break {
        None => println!("V_{{{s},{j}}} over {terms} terms: slow throughout"),
        Some(n) => println!("V_{{{s},{j}}} over {terms} terms: first non-slow step at index {n}"),
    }
    for violation in &violations {
        println!("{violation}");
    }
    println!("\n{} violation(s)", violations.len());

    if all_hold {
        println!("All lemmas hold.");
        Ok(())
    } else {
        Err(format!("lemma battery failed with {} violation(s)", violations.len()).into())
    }
}
