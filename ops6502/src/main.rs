extern crate clap;

use std::fs::File;
use std::io::{self, Write};
use std::process;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, LevelFilter};

use numutil::hex;
use ops6502::{Error, OpcodeTable, Result};

fn generate(table: &OpcodeTable, matches: &ArgMatches) -> Result<()> {
    let json = table.to_json(matches.is_present("pretty"))?;
    let outfile = matches.value_of("output").unwrap_or("opcodes.json");

    if outfile == "-" {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", json)?;
    } else {
        let mut file = File::create(outfile)?;
        file.write_all(json.as_bytes())?;
        info!("wrote {} mnemonics to {}", table.len(), outfile);
    }

    Ok(())
}

fn lookup(table: &OpcodeTable, op: &str) -> Result<()> {
    if !op.is_empty() && op.chars().all(|c| c.is_ascii_alphabetic()) {
        let m = table.get(op).ok_or_else(|| Error::UnknownMnemonic(op.to_string()))?;
        let codes: Vec<String> = m.entries.iter().map(|e| hex(i64::from(e.0))).collect();
        println!("{} {}", op, codes.join(" "));
    } else {
        let value = numutil::parse(op)?;
        if !(0..=0xff).contains(&value) {
            return Err(Error::UnknownOpcode(value));
        }
        let (name, mode) = table
            .find_opcode(value as u8)
            .ok_or(Error::UnknownOpcode(value))?;
        println!("{} {} {}", hex(value), name, mode);
    }

    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let table = OpcodeTable::build()?;

    match matches.subcommand() {
        ("gen", Some(sub)) => generate(&table, sub),
        ("lookup", Some(sub)) => {
            for op in sub.values_of("OP").into_iter().flatten() {
                lookup(&table, op)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn main() {
    let matches = App::new("6502 Opcode Tables")
        .version("1.0")
        .author("Seth J. Morabito <web@loomcom.com>")
        .about("Generates and queries the 6502 opcode table")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("verbose")
             .short("v")
             .multiple(true)
             .global(true)
             .help("Increase log verbosity"))
        .subcommand(SubCommand::with_name("gen")
                    .about("Write the opcode table as JSON")
                    .arg(Arg::with_name("output")
                         .value_name("FILE")
                         .short("o")
                         .long("output")
                         .help("Output file, '-' for stdout [default: opcodes.json]")
                         .takes_value(true))
                    .arg(Arg::with_name("pretty")
                         .long("pretty")
                         .help("Indent the JSON output")))
        .subcommand(SubCommand::with_name("lookup")
                    .about("Look up opcodes by mnemonic, or a mnemonic by opcode")
                    .arg(Arg::with_name("OP")
                         .help("Mnemonic (e.g. lda) or opcode (e.g. 0xA9)")
                         .required(true)
                         .multiple(true)
                         .index(1)))
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
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
