extern crate clap;
extern crate morph;

mod commands;
mod frames;
mod normalize;

use clap::{App, Arg, ArgMatches, SubCommand};
use commands::*;
use morph::ParseError;

use std::fmt;
use std::fs::File;
use std::io::{self, stdout, Read, Write};
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("morph command-line interface")
        .version("0.1")
        .author("The morph developers")
        .about("SVG path interpolation")
        .subcommand(SubCommand::with_name("frames")
            .about("Prints the frames of a transition between two paths, one per line")
            .arg(Arg::with_name("FROM")
                .value_name("FROM")
                .help("The path at the start of the transition")
                .takes_value(true)
                .required(false)
            )
            .arg(Arg::with_name("TO")
                .value_name("TO")
                .help("The path at the end of the transition")
                .takes_value(true)
                .required(false)
            )
            .arg(Arg::with_name("COUNT")
                .short("c")
                .long("count")
                .help("Sets the number of steps (10 by default), prints one more frame")
                .value_name("COUNT")
                .takes_value(true)
            )
            .arg(Arg::with_name("EXCLUDE_VERTICAL")
                .long("exclude-vertical")
                .help("Does not insert points into vertical segments")
            )
        )
        .subcommand(SubCommand::with_name("normalize")
            .about("Parses a path and prints it back in normalized form")
            .arg(Arg::with_name("PATH")
                .value_name("PATH")
                .help("An SVG path")
                .takes_value(true)
                .required(false)
            )
            .arg(Arg::with_name("INPUT")
                .help("Sets the input file to use")
                .short("i")
                .long("input")
                .value_name("FILE")
                .takes_value(true)
                .required(false)
            )
            .arg(Arg::with_name("STRICT")
                .long("strict")
                .help("Rejects missing and invalid parameters")
            )
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let output: Box<dyn Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    if let Some(frames_matches) = matches.subcommand_matches("frames") {
        let cmd = FramesCmd {
            from: frames_matches.value_of("FROM").map(str::to_string),
            to: frames_matches.value_of("TO").map(str::to_string),
            count: get_count(frames_matches)?,
            exclude_vertical: frames_matches.is_present("EXCLUDE_VERTICAL"),
            output,
        };

        frames::frames(cmd)
    } else if let Some(normalize_matches) = matches.subcommand_matches("normalize") {
        let mut input = normalize_matches.value_of("PATH").unwrap_or("").to_string();
        if let Some(input_file) = normalize_matches.value_of("INPUT") {
            File::open(input_file)?.read_to_string(&mut input)?;
        }

        let cmd = NormalizeCmd {
            input,
            strict: normalize_matches.is_present("STRICT"),
            output,
        };

        normalize::normalize(cmd)
    } else {
        Err(CliError::MissingCommand)
    }
}

fn get_count(matches: &ArgMatches) -> Result<usize, CliError> {
    match matches.value_of("COUNT") {
        Some(count) => count
            .parse()
            .map_err(|_| CliError::InvalidCount(count.to_string())),
        None => Ok(10),
    }
}

#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    Parse(ParseError),
    InvalidCount(String),
    MissingCommand,
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        CliError::Parse(err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O error: {}", err),
            CliError::Parse(err) => write!(f, "Invalid path: {}", err),
            CliError::InvalidCount(count) => write!(f, "Invalid frame count {:?}", count),
            CliError::MissingCommand => write!(f, "Missing command, see --help"),
        }
    }
}
