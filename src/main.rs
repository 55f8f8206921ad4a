use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gifts::Options;

#[derive(Debug, Parser)]
#[command(name = "gifts", about = "Solve the puzzle behind one of the submarine's gifts")]
struct Args {
    /// Puzzle day
    day: u8,

    /// 1 or 2
    part: u8,

    /// Read day{DAY}test{TEST}.in instead of day{DAY}.in
    #[arg(short, long)]
    test: Option<u32>,

    /// Directory holding the puzzle inputs
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Read this file instead of the conventional one
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Fail on malformed lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Day 3 word width (default: length of the first line)
    #[arg(long)]
    bit_width: Option<usize>,

    /// Day 11 gives up looking for a synchronized flash after this many steps
    #[arg(long, default_value_t = gifts::octopus::SYNC_STEP_LIMIT)]
    flash_step_limit: usize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let path = args.input.clone().unwrap_or_else(|| args.input_dir.join(match args.test {
        Some(test) => format!("day{}test{}.in", args.day, test),
        None => format!("day{}.in", args.day),
    }));
    let input = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    info!(path = %path.display(), bytes = input.len(), "input loaded");

    let options = Options {strict: args.strict, bit_width: args.bit_width, flash_step_limit: args.flash_step_limit};
    let time = std::time::Instant::now();
    match gifts::solve(args.day, args.part, &input, &options) {
        Ok(answer) => println!("{}", answer),
        Err(err) => {
            error!(day = args.day, part = args.part, %err, "puzzle failed");
            return Err(err.into());
        }
    }
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
