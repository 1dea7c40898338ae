use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    dastur::cli::main()
}
