use metafib::recurrence::compute_conway;

use super::join_terms;

pub fn run(terms: usize) -> Result<(), Box<dyn std::error::Error>> {
    if terms < 3 {
        return Err("terms must be at least 3 (two terms are initial conditions)".into());
    }
    let mut a = vec![0_i64; terms + 1];
    a[1] = 1;
    a[2] = 1;
    let last = compute_conway(&mut a, 0, 1, 1, 3, false)?;

    println!("Conway's sequence through index {last}:");
    println!("{}", join_terms(&a[1..=last]));
    Ok(())
}
