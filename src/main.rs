mod cli;
mod data;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use data::loader;
use data::select::select_chairs;

fn main() -> Result<()> {
    env_logger::init();

    let (path, query) = Cli::parse().into_query();

    let roster = loader::load_file(&path)?;
    let eligible = select_chairs(&roster, &query)?;

    print!("{}", roster.render(&eligible));
    Ok(())
}
