// This binary crate is intentionally minimal.
// All threshold logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example gates
//   cargo run --example decoder
fn main() {
    println!("ferrite-tlu: McCulloch-Pitts threshold logic units in Rust.");
    println!("Run `cargo run --example gates` or `cargo run --example decoder`.");
}
