use ferrite_tlu::{Decoder, TluError};

fn main() -> Result<(), TluError> {
    // The function that is 1 exactly on {010, 011, 101}.
    let decoder = Decoder::new(vec![
        vec![0, 1, 0],
        vec![0, 1, 1],
        vec![1, 0, 1],
    ])?;
    let mut network = decoder.decode();

    println!("Decoded function over {} bits:", network.arity());
    for v in 0u8..8 {
        let args = [(v >> 2) & 1, (v >> 1) & 1, v & 1];
        println!("  f({}, {}, {}) = {}", args[0], args[1], args[2], network.eval(&args)?);
    }

    Ok(())
}
