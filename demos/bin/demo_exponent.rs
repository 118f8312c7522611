//! Exponent Demo
//!
//! Demonstrates powers and inverses of gates, operations and operation
//! sequences, including why canonical exponents do not compose associatively.

use anyhow::Result;
use clap::Parser;

use qop_demos::catalog::GateChoice;
use qop_demos::{init_logging, print_header, print_info, print_result, print_section, print_success};
use qop_ir::gates::{CNotPowGate, ZPowGate};
use qop_ir::{Capable, Describe, GateExt, QubitId};
use qop_protocols::{inverse, is_invertible, power, try_power};

#[derive(Parser, Debug)]
#[command(name = "demo-exponent")]
#[command(about = "Show powers and inverses of standard gates")]
struct Args {
    /// Gate family to exponentiate
    #[arg(value_enum, default_value = "x")]
    gate: GateChoice,

    /// Exponent to apply
    #[arg(short, long, default_value = "0.5", allow_negative_numbers = true)]
    exponent: f64,

    /// Repetition count used for the associativity check
    #[arg(short, long, default_value = "3")]
    repeat: u32,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    print_header("Gate Exponent Demo");

    let gate = args.gate.build(1.0);
    print_section("Gate");
    print_result("Gate", &gate);
    print_result("Capabilities", gate.capability_set());
    print_result("Invertible", is_invertible(gate.as_ref()));

    print_section("Powers");
    let powered = power(gate.as_ref(), args.exponent)?;
    print_result(&format!("power(g, {})", args.exponent), &powered);
    print_result("inverse(g)", inverse(gate.as_ref())?);
    print_result("inverse(power(g, e))", inverse(powered.as_ref())?);
    match try_power(gate.as_ref(), f64::NAN) {
        Ok(_) => print_info("NaN exponent accepted"),
        Err(e) => print_result("power(g, NaN)", e),
    }

    print_section("Associativity");
    let repeat = f64::from(args.repeat);
    let nested = power(power(gate.as_ref(), repeat)?.as_ref(), args.exponent)?;
    let flat = power(gate.as_ref(), repeat * args.exponent)?;
    print_result(&format!("power(power(g, {repeat}), {})", args.exponent), &nested);
    print_result(&format!("power(g, {})", repeat * args.exponent), &flat);
    if nested == flat {
        print_info("Both orders agree for this exponent");
    } else {
        print_info("Exponents are canonicalized after every step, so the orders differ");
    }

    print_section("Sequences");
    let (a, b) = (QubitId::line(0), QubitId::line(1));
    let sequence = vec![
        ZPowGate::s().on([b.clone()])?,
        CNotPowGate::cnot().on([a, b])?,
    ];
    print_result("Sequence", sequence.describe());
    print_result("Inverse", inverse(sequence.as_slice())?.describe());
    match try_power(sequence.as_slice(), 2.0)? {
        Some(squared) => print_result("Squared", squared.describe()),
        None => print_info("Sequences only support the exponent -1"),
    }

    println!();
    print_success("Exponent demo completed");
    Ok(())
}
