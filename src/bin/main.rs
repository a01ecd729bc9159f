use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use env_logger::Builder;

use transport::algorithm::Method;
use transport::data::problem::Problem;
use transport::io::import;

/// Initial feasible solutions for the transportation problem.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description; a small example problem is used when absent
    problem_file: Option<PathBuf>,
    /// Only run this method
    #[arg(long, value_enum)]
    method: Option<MethodArg>,
    #[command(flatten)]
    verbose: Verbosity,
}

#[derive(Copy, Clone, ValueEnum)]
enum MethodArg {
    NorthwestCorner,
    Vogel,
    Russell,
}

impl From<MethodArg> for Method {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::NorthwestCorner => Method::NorthwestCorner,
            MethodArg::Vogel => Method::Vogel,
            MethodArg::Russell => Method::Russell,
        }
    }
}

fn example() -> Result<Problem<u64>> {
    let problem = Problem::new(
        vec![
            vec![464, 513, 654, 867],
            vec![352, 416, 690, 791],
            vec![995, 682, 388, 685],
        ],
        vec![75, 125, 100],
        vec![80, 65, 70, 85],
    )?;

    Ok(problem)
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    let problem = match &opts.problem_file {
        Some(path) => import(path)
            .with_context(|| format!("Couldn't read the problem file \"{}\"", path.display()))?,
        None => example()?,
    };

    println!("Transportation problem:\n{problem}\n");

    match opts.method {
        Some(method) => {
            let method = Method::from(method);
            let allocation = problem.solve(method).context("Can't compute an initial solution")?;
            println!("{method}\n{allocation}\nTotal cost: {}", problem.total_cost(&allocation));
        },
        None => {
            let solutions = problem.solve_all().context("Can't compute initial solutions")?;
            for (method, allocation) in &solutions {
                println!("{method}\n{allocation}\nTotal cost: {}\n", problem.total_cost(allocation));
            }
            let (method, cost) = problem.cheapest(&solutions);
            println!("Cheapest: {method}, with a total cost of {cost}");
        },
    }

    Ok(())
}
