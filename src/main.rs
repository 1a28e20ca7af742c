use railhop::network::Graph;
use railhop::problem::Instance;
use railhop::search::shortest_hops;
use railhop::utils::{Args, Parser};

use std::process::ExitCode;

fn run(args: &Args) -> Result<(), String> {
    let instance = match &args.file {
        Some(path) => Instance::load(path)?,
        None => Instance::from_reader(std::io::stdin().lock())?,
    };

    let graph = Graph::build(instance.n_cities, &instance.routes, &instance.airports);

    // An unreachable target is a normal outcome, reported on stdout.
    match shortest_hops(&graph, instance.source, instance.target) {
        Some(hops) => println!("{}", hops),
        None => println!("Impossible"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(message) = run(&args) {
        eprintln!("{}", message);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
