// Integer swap demo: by-reference exchange, then the by-value pitfall

use passby::scenario::{swap_by_reference_scene, swap_by_value_scene};
use passby::swap::IntPair;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pair = IntPair::new(21, 17);

    println!("== swap by reference ==");
    let (_, trace) = swap_by_reference_scene(pair)?;
    print!("{}", trace);

    println!();
    println!("== swap by value ==");
    let (_, trace) = swap_by_value_scene(pair)?;
    print!("{}", trace);

    Ok(())
}
