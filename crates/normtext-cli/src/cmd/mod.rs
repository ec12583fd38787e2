use anyhow::Result;

use crate::args::{Cli, Command};

mod inspect;
mod normalize;
mod slugify;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Normalize { input, opts } => normalize::run(&input, &opts),
        Command::Slugify {
            input,
            sep,
            encoding,
        } => slugify::run(&input, sep, &encoding),
        Command::Inspect { input, encoding } => inspect::run(&input, &encoding),
    }
}
