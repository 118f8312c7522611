//! Decomposition Demo
//!
//! Demonstrates recursive decomposition of standard gates into the
//! `{single-qubit, CZ}` primitive set.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use tracing::info;

use qop_demos::catalog::{GateChoice, is_primitive};
use qop_demos::{
    create_progress_bar, describe_operation, init_logging, print_header, print_info,
    print_result, print_section, print_success,
};
use qop_ir::{Capable, Operation, QubitId};
use qop_protocols::{Decomposer, ProtocolConfig};

#[derive(Parser, Debug)]
#[command(name = "demo-decompose")]
#[command(about = "Decompose a standard gate into single-qubit gates and CZ")]
struct Args {
    /// Gate to decompose
    #[arg(value_enum, default_value = "ccx")]
    gate: GateChoice,

    /// Exponent applied to the gate
    #[arg(short, long, default_value = "1.0", allow_negative_numbers = true)]
    exponent: f64,

    /// Number of staggered copies of the gate to decompose
    #[arg(short = 'n', long, default_value = "1")]
    copies: usize,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the maximum decomposition depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Restrict diagram symbols to ASCII
    #[arg(long)]
    ascii: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config =
        ProtocolConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(max_depth) = args.max_depth {
        config.decompose.max_depth = max_depth;
    }
    if args.ascii {
        config.diagram.use_unicode = false;
    }
    config.validate()?;

    print_header("Gate Decomposition Demo");

    let op = args.gate.operation(args.exponent)?;
    print_section("Input");
    print_result("Operation", describe_operation(&op, &config.diagram)?);
    print_result("Capabilities", op.capability_set());
    print_result("Max depth", config.decompose.max_depth);

    let roots = staggered_copies(&op, args.copies)?;
    let decomposer = Decomposer::from_config(&config.decompose).keep(is_primitive);

    print_section("Decomposition");
    info!(roots = roots.len(), max_depth = config.decompose.max_depth, "decomposing");
    let pb = create_progress_bar(roots.len() as u64, "decomposing");
    let mut output = Vec::new();
    for root in &roots {
        output.extend(decomposer.run(root)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    for (i, primitive) in output.iter().enumerate() {
        println!(
            "  {:>3}. {}",
            i + 1,
            describe_operation(primitive, &config.diagram)?
        );
    }

    print_section("Summary");
    print_result("Input operations", roots.len());
    print_result("Primitive operations", output.len());
    let two_qubit = output.iter().filter(|op| op.num_qubits() == 2).count();
    print_result("CZ operations", two_qubit);

    let again = decomposer.run_all(&output)?;
    ensure!(again == output, "decomposition is not idempotent");

    println!();
    print_success("Every operation is primitive and re-decomposing changes nothing");
    print_info("Use -vv to trace each expansion step");
    Ok(())
}

/// Copies of `op` shifted along the line so that consecutive copies overlap.
fn staggered_copies(op: &Operation, copies: usize) -> Result<Vec<Operation>> {
    (0..copies)
        .map(|offset| {
            let offset = i32::try_from(offset)?;
            let shifted = op.transform_qubits(|q| match q {
                QubitId::Line(x) => QubitId::line(x + offset),
                other => other.clone(),
            })?;
            Ok(shifted)
        })
        .collect()
}
