use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use xgoals::file::FromJsonFile;
use xgoals::print;
use xgoals::team::Fixture;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the fixture from; the built-in example fixture is used if omitted
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// print the goal distribution of each side
    #[clap(long)]
    distributions: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(file) = &self.file {
            if !file.is_file() {
                bail!("{} is not a file", file.display());
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let fixture = match &args.file {
        None => Fixture::default(),
        Some(path) => Fixture::from_json_file(path)?,
    };
    info!(
        "{} ({} shots) v {} ({} shots)",
        fixture.home.name,
        fixture.home.shots.len(),
        fixture.away.name,
        fixture.away.shots.len()
    );

    let analysis = fixture.analyse()?;
    debug!("analysis: {analysis:?}");

    let table = print::tabulate_summary(&analysis);
    println!("{}", Console::default().render(&table));

    if args.distributions {
        let table = print::tabulate_distribution(&analysis);
        println!("Goal distributions:\n{}", Console::default().render(&table));
    }
    Ok(())
}
