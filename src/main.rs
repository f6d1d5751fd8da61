use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    novel_agent::cli::main()
}
