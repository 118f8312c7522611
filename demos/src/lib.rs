//! Quantum Operation Protocol Demos
//!
//! This crate provides small command-line demonstrations of the capability
//! protocols:
//!
//! - **demo-decompose**: decomposes a standard gate into single-qubit gates
//!   and CZ powers, printing every resulting operation with its diagram label
//! - **demo-exponent**: shows powers, inverses and the non-associativity of
//!   canonical exponent composition
//!
//! The [`catalog`] module maps command-line gate names to gate values.

pub mod catalog;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use qop_ir::{DiagramArgs, Operation};
use qop_protocols::{ProtocolResult, try_diagram_info};
use tracing_subscriber::EnvFilter;

/// Install the log subscriber, picking the level from a `-v` count.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

/// Create a progress bar for demo operations.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Render an operation with its diagram label, e.g. `CNOT(q(0), q(1))  [@, X^0.5]`.
pub fn describe_operation(op: &Operation, args: &DiagramArgs) -> ProtocolResult<String> {
    let args = args.clone().with_known_qubit_count(op.num_qubits());
    let Some(info) = try_diagram_info(op, &args)? else {
        return Ok(op.to_string());
    };

    let mut symbols = info.symbols_for(op.num_qubits());
    if let (Some(suffix), Some(last)) = (info.exponent_suffix(&args), symbols.last_mut()) {
        last.push_str(&suffix);
    }
    Ok(format!("{op}  [{}]", symbols.join(", ")))
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
