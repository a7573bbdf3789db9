use std::{fs, process};

use clap::Parser;
use printscript::{
    Version,
    interpreter::{
        evaluator::core::Context,
        io::{ProcessEnv, StdinInput, StdoutSink},
    },
    run_source, validate_source,
};
use tracing::info;

/// printscript runs PrintScript programs, a small typed scripting language
/// with `let`/`const` variables, `if`/`else` and console I/O.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells printscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The PrintScript version the program is written in.
    #[arg(short, long, value_enum, default_value_t = Version::V1_1)]
    language_version: Version,

    /// Only check that the program parses, then report how many statements
    /// it has.
    #[arg(long)]
    validate: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                              eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                        &args.contents);
                                              process::exit(1);
                                          })
    } else {
        args.contents
    };

    let outcome = if args.validate {
        validate_source(&script, args.language_version).map(|count| {
            info!(version = %args.language_version, statements = count, "validated program");
            println!("Valid PrintScript {}: {count} statement(s).", args.language_version);
        })
    } else {
        let mut input = StdinInput;
        let mut output = StdoutSink;
        let mut context = Context::new(&mut input, &ProcessEnv, &mut output);
        run_source(&script, args.language_version, &mut context)
    };

    match outcome {
        Ok(()) => info!(version = %args.language_version, validate = args.validate, "run succeeded"),
        Err(e) => {
            info!(version = %args.language_version, validate = args.validate, error = %e, "run failed");
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
