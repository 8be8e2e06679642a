extern crate clap;

use std::io::{self, BufRead, Write};
use std::process;

use clap::{App, Arg, ArgMatches};
use log::{debug, warn, LevelFilter};

use numutil::format_conversion;

use crate::errors::{Error, Result};
use crate::tables::{select, Table, TABLES};

mod errors;
mod tables;

fn print_table(table: &Table) {
    println!("{}", table.title);
    println!("{}", table.format());
}

fn print_menu() {
    println!("Select a table to print:");
    for table in TABLES.iter() {
        println!("\t{}: {}", table.key, table.title);
    }
}

/// Keep offering tables until the input runs out.
fn selection_loop() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        print!("choice: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(());
        }

        match select(line.trim()) {
            Ok(table) => print_table(table),
            Err(Error::InvalidSelection(_)) => println!("Invalid selection"),
            Err(e) => return Err(e),
        }

        println!();
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    if let Some(values) = matches.values_of("convert") {
        for value in values {
            let converted = format_conversion(value)?;
            if converted == value {
                warn!("'{}' is not a number", value);
            }
            println!("{}", converted);
        }
        return Ok(());
    }

    match matches.value_of("TABLE") {
        Some(key) => {
            print_table(select(key)?);
            Ok(())
        }
        None => selection_loop(),
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("Number Tables")
        .version("1.0")
        .author("Seth J. Morabito <web@loomcom.com>")
        .about("Hex, binary and decimal lookup tables")
        .arg(Arg::with_name("convert")
             .value_name("VALUE")
             .short("c")
             .long("convert")
             .help("Print each value in decimal, hex and binary")
             .takes_value(true)
             .multiple(true))
        .arg(Arg::with_name("verbose")
             .short("v")
             .multiple(true)
             .help("Increase log verbosity"))
        .arg(Arg::with_name("TABLE")
             .help("Table to print (h, b, d, ih, ib, id). Prompts when absent")
             .index(1))
}

fn main() {
    let matches = app().get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
