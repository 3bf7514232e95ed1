//! The `make` command - make pizza orders given on the command line.

use std::process::ExitCode;

use pizzeria::{Design, Report, demo};

use crate::cli::{DesignChoice, MakeArgs};

/// Run the make command.
pub fn run(args: MakeArgs) -> ExitCode {
    serve(&args.orders, args.design)
}

/// Make `orders` with the chosen design and print one report per line.
///
/// With [`DesignChoice::Both`], each order goes through both kitchens. Orders
/// where they agree print once; orders where they disagree print both sides
/// to stderr and make the whole run fail.
pub fn serve<S: AsRef<str>>(orders: &[S], choice: DesignChoice) -> ExitCode {
    match choice {
        DesignChoice::Naive => output_single_result(demo::run(Design::Naive, orders)),
        DesignChoice::Factory => output_single_result(demo::run(Design::Factory, orders)),
        DesignChoice::Both => output_both_results(orders),
    }
}

fn output_single_result(reports: Vec<Report>) -> ExitCode {
    for report in reports {
        println!("{}", report);
    }
    ExitCode::SUCCESS
}

fn output_both_results<S: AsRef<str>>(orders: &[S]) -> ExitCode {
    let naive = Design::Naive.chef();
    let factory = Design::Factory.chef();
    let mut status = ExitCode::SUCCESS;

    for order in orders {
        let order = order.as_ref();
        let naive_reports = naive.make_pizza(order);
        let factory_reports = factory.make_pizza(order);

        if naive_reports == factory_reports {
            for report in factory_reports {
                println!("{}", report);
            }
        } else {
            tracing::debug!(order, "designs disagree");
            eprintln!("MISMATCH!");
            for report in naive_reports {
                eprintln!("  naive:   {}", report);
            }
            for report in factory_reports {
                eprintln!("  factory: {}", report);
            }
            status = ExitCode::FAILURE;
        }
    }

    status
}
