use miette::Result;

/// Main entry point for the dotweave CLI
fn main() -> Result<()> {
    miette::set_panic_hook();

    dotweave::run()
}
