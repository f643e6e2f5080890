fn main() -> anyhow::Result<()> {
    viewrouter::cli::run_cli()
}
