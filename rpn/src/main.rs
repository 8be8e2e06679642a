extern crate clap;

use std::io::{self, BufRead, Write};
use std::process;

use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter};

use numutil::Bases;
use rpn::{evaluate, tokenize, Division, Error, EvalOptions, Tilde};

fn log_level(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn options(matches: &ArgMatches) -> EvalOptions {
    EvalOptions {
        division: if matches.is_present("integer-division") {
            Division::Floor
        } else {
            Division::True
        },
        tilde: if matches.is_present("complement") {
            Tilde::Complement
        } else {
            Tilde::Negate
        },
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let options = options(matches);
    info!("evaluating with {:?}", options);

    let evaluation = match matches.values_of("EQUATION") {
        Some(args) => {
            // Accept both `rpn 3 4 +` and `rpn "3 4 +"`.
            let tokens: Vec<&str> = args.flat_map(str::split_whitespace).collect();
            let evaluation = evaluate(&tokens, options)?;
            println!("{}", evaluation);
            evaluation
        }
        None => {
            print!("Enter equation: ");
            io::stdout().flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;

            let evaluation = evaluate(tokenize(&line), options)?;
            println!("{} is {}", line.trim_end(), evaluation);
            evaluation
        }
    };

    if matches.is_present("bases") {
        println!("{}", evaluation.value.in_bases(Bases::ALL));
    }

    Ok(())
}

fn main() {
    let matches = App::new("RPN Calculator")
        .version("1.0")
        .author("Seth J. Morabito <web@loomcom.com>")
        .about("Evaluates reverse Polish notation integer expressions")
        .arg(Arg::with_name("integer-division")
             .long("integer-division")
             .help("Make '/' floor divide integers instead of producing a float"))
        .arg(Arg::with_name("complement")
             .long("complement")
             .help("Make '~' a bitwise complement instead of a negation"))
        .arg(Arg::with_name("bases")
             .short("b")
             .long("bases")
             .help("Also print the result in decimal, hex and binary"))
        .arg(Arg::with_name("verbose")
             .short("v")
             .multiple(true)
             .help("Increase log verbosity"))
        .arg(Arg::with_name("EQUATION")
             .value_name("TOKEN")
             .help("Equation tokens, e.g. 3 4 +. Prompts when absent")
             .multiple(true)
             .allow_hyphen_values(true)
             .index(1))
        .get_matches();

    env_logger::Builder::new()
        .filter_level(log_level(matches.occurrences_of("verbose")))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
