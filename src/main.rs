use log::debug;
use overlap_merge::driver::{QueryError, run_queries};
use overlap_merge::input::{InputError, parse_input};
use std::io::{BufWriter, Read, Write};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
enum RunError {
    #[error("Failed to read input or write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),
}

// Reads everything before processing anything, so an invalid query leaves the output empty.
fn run(text: &str, out: &mut impl Write) -> Result<(), RunError> {
    let Some(input) = parse_input(text)? else {
        debug!("no header, nothing to do");
        return Ok(());
    };

    let totals = run_queries(input.n_items, input.queries)?;
    for total in totals {
        writeln!(out, "{total}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_stdio() -> Result<(), RunError> {
    let mut text = String::new();
    std::io::stdin().lock().read_to_string(&mut text)?;
    let mut out = BufWriter::new(std::io::stdout().lock());
    run(&text, &mut out)
}

fn main() {
    env_logger::init();

    let start = Instant::now();
    if let Err(e) = run_stdio() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    debug!("elapsed {:?}", start.elapsed());
}
