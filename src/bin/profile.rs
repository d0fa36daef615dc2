use spanmaze::{Solver, app::profile};

fn main() -> Result<(), spanmaze::error::CliError> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());
    profile(70, 40, Solver::Bfs, num_iters, &mut std::io::stdout())?;
    Ok(())
}
