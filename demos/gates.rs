use ferrite_tlu::{and, or, not};

fn main() -> Result<(), ferrite_tlu::TluError> {
    println!("AND (two excitatory inputs, threshold 2)");
    for x1 in 0..=1 {
        for x2 in 0..=1 {
            println!("  {x1} AND {x2} = {}", and(x1, x2)?);
        }
    }

    println!("OR (two excitatory inputs, threshold 1)");
    for x1 in 0..=1 {
        for x2 in 0..=1 {
            println!("  {x1} OR {x2} = {}", or(x1, x2)?);
        }
    }

    println!("NOT (one inhibitory input, threshold 0)");
    for x in 0..=1 {
        println!("  NOT {x} = {}", not(x)?);
    }

    Ok(())
}
