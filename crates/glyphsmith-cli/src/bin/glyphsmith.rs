use clap::Parser;
use glyphsmith_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let output = run(&cli, &mut std::io::stdin().lock())?;
    println!("{}", output.trim_end_matches('\n'));
    Ok(())
}
