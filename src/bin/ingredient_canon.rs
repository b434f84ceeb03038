use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    ingredient_canon::cli::run_normalize_cli(std::env::args().skip(1))
}
