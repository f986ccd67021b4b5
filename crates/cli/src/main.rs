fn main() -> Result<(), Box<dyn std::error::Error>> {
    hookgen_cli::run()
}
