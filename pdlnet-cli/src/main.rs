//! PDLNET command-line driver.
//!
//! Validates model documents and transforms process definitions into Petri
//! nets. Load and save failures are reported to stderr and never abort a
//! batch: remaining arguments are still processed.

mod report;

use std::env;
use std::process::ExitCode;

use pdlnet_transform::transform;
use pdlnet_validate::{PetriNetValidator, SimplePdlValidator};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.split_first() {
        Some((command, rest)) => match command.as_str() {
            "validate-pdl" => validate_pdl(rest),
            "validate-petri" => validate_petri(rest),
            "transform" => run_transform(rest),
            "help" | "--help" | "-h" => {
                print_usage();
                ExitCode::SUCCESS
            }
            other => {
                eprintln!("unknown command: {other}");
                print_usage();
                ExitCode::from(2)
            }
        },
        None => {
            print_usage();
            ExitCode::from(2)
        }
    }
}

fn validate_pdl(files: &[String]) -> ExitCode {
    if files.is_empty() {
        eprintln!("usage: pdlnet validate-pdl <file>...");
        return ExitCode::from(2);
    }

    let validator = SimplePdlValidator::new();
    let mut failed = false;

    for file in files {
        match pdlnet_document::load_process(file) {
            Ok(process) => {
                let result = validator.validate(&process);
                println!("\nValidation result for {file}:");
                report::print_pdl_result(&result);
                if !result.is_empty() {
                    failed = true;
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
            }
        }
    }

    println!("\nValidation finished.");
    exit_code(failed)
}

fn validate_petri(files: &[String]) -> ExitCode {
    if files.is_empty() {
        eprintln!("usage: pdlnet validate-petri <file>...");
        return ExitCode::from(2);
    }

    let validator = PetriNetValidator::new();
    let mut failed = false;

    for file in files {
        match pdlnet_document::load_petri_net(file) {
            Ok(net) => {
                let result = validator.validate(&net);
                println!("\nValidation result for {file}:");
                report::print_petri_result(&result);
                if !result.is_empty() {
                    failed = true;
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
            }
        }
    }

    println!("\nValidation finished.");
    exit_code(failed)
}

fn run_transform(args: &[String]) -> ExitCode {
    let mut input: Option<&String> = None;
    let mut output: Option<&String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => match iter.next() {
                Some(path) => output = Some(path),
                None => {
                    eprintln!("missing path after {arg}");
                    return ExitCode::from(2);
                }
            },
            _ if input.is_none() => input = Some(arg),
            extra => {
                eprintln!("unexpected argument: {extra}");
                return ExitCode::from(2);
            }
        }
    }

    let Some(input) = input else {
        eprintln!("usage: pdlnet transform <file> [-o <output>]");
        return ExitCode::from(2);
    };

    let process = match pdlnet_document::load_process(input) {
        Ok(process) => process,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let net = transform(&process);
    report::print_net(&net);

    if let Some(output) = output {
        if let Err(err) = pdlnet_document::save_petri_net(output, &net) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
        println!("\nPetri net saved to {output}");
    }

    ExitCode::SUCCESS
}

fn exit_code(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_usage() {
    println!("pdlnet - SimplePDL / Petri-net model tools");
    println!();
    println!("Commands:");
    println!("  validate-pdl <file>...           Validate process-definition documents");
    println!("  validate-petri <file>...         Validate Petri-net documents");
    println!("  transform <file> [-o <output>]   Transform a process definition into a Petri net");
    println!("  help                             Show this help");
}
