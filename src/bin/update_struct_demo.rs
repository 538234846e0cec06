// Struct-by-value demo: the callee renames its copy, the caller keeps theirs

use passby::record::Person;
use passby::scenario::update_struct_scene;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let person = Person::new(42, "John", "Doe")?;

    println!("== struct passed by value ==");
    let (_, trace) = update_struct_scene(person, "Timmy", "Blunt")?;
    print!("{}", trace);

    Ok(())
}
