#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]

use clap::Parser;
use std::process;

use gausstab::table;

#[derive(Parser)]
#[command(
    name = "gausstab",
    about = "Tabulate Gauss-Legendre quadrature nodes and weights",
    long_about = "Computes Gauss-Legendre quadrature nodes and weights for every order \
                  from 1 to MAX_ORDER and writes them to a space-delimited table file \
                  in the current working directory."
)]
struct Cli {
    /// Highest quadrature order to tabulate
    #[arg(
        value_name = "MAX_ORDER",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_order: u32,
}

fn run(cli: &Cli) -> Result<(), table::TableError> {
    let name = table::file_name(cli.max_order);

    println!(
        "Tabulating Gauss-Legendre rules for orders 1..={}",
        cli.max_order
    );
    table::write(&name, cli.max_order)?;
    println!("Table written to: {name}");

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
