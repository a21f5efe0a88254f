use clap::{arg_enum, crate_name, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{error, info};
use monosim::global::conf_def;
use monosim::report::{write_banner, write_json, write_table, write_text};
use monosim::roll::Roll;
use monosim::sim::{load_rolls, simulate, simulate_scripted, SimConfig};
use std::fs::OpenOptions;
use std::io::{self, Write};

/// Validates the given expression can be parsed as the given type following clap's convention:
/// Return Ok(()) if yes, else Err(string_describing_the_problem)
macro_rules! validate_as {
    ($T:ty, $V:expr) => {
        match $V.parse::<$T>() {
            Ok(_) => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    };
}

/// Assuming you have previously validated the given expression can be parsed successfully as the
/// give type, this saves a tiny bit of typing and hides the unwrap
macro_rules! parse_as {
    ($T:ty, $V:expr) => {
        $V.parse::<$T>().unwrap()
    };
}

arg_enum! {
    #[derive(PartialEq, Debug)]
    enum SimulateOutFmt {
        Text,
        Json,
        Table,
    }
}

/// Start from the config file (or the defaults) and apply whatever was given on the command line
fn get_config(args: &ArgMatches) -> Result<SimConfig, ()> {
    let mut conf = if let Some(fname) = args.value_of("config") {
        let fd = match OpenOptions::new().read(true).open(fname) {
            Err(e) => {
                error!("Error opening config {}: {}", fname, e);
                return Err(());
            }
            Ok(fd) => fd,
        };
        match SimConfig::from_reader(fd) {
            Err(e) => {
                error!("Error in config {}: {}", fname, e);
                return Err(());
            }
            Ok(c) => c,
        }
    } else {
        SimConfig::default()
    };
    if args.occurrences_of("numgames") > 0 {
        conf.games = parse_as!(u32, args.value_of("numgames").unwrap());
    }
    if args.occurrences_of("nummoves") > 0 {
        conf.moves = parse_as!(u32, args.value_of("nummoves").unwrap());
    }
    if let Some(s) = args.value_of("seed") {
        conf.seed = Some(parse_as!(u64, s));
    }
    if args.is_present("shuffle") {
        conf.shuffle = true;
    }
    Ok(conf)
}

fn get_rolls(fname: &str) -> Result<Vec<Roll>, ()> {
    let fd = match OpenOptions::new().read(true).open(fname) {
        Err(e) => {
            error!("Error opening input --rolls {}: {}", fname, e);
            return Err(());
        }
        Ok(fd) => fd,
    };
    match load_rolls(io::BufReader::new(fd)) {
        Err(e) => {
            error!("Error in --rolls {}: {}", fname, e);
            Err(())
        }
        Ok(rolls) => {
            info!("Read {} rolls from {}", rolls.len(), fname);
            Ok(rolls)
        }
    }
}

fn run_simulate(args: &ArgMatches) -> Result<(), ()> {
    let conf = get_config(args)?;
    let outfmt = parse_as!(SimulateOutFmt, args.value_of("outfmt").unwrap());
    let rolls = match args.value_of("rolls") {
        Some(fname) => Some(get_rolls(fname)?),
        None => None,
    };
    // reject a bad config before printing anything
    if let Err(e) = conf.validate() {
        error!("{}", e);
        return Err(());
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if outfmt == SimulateOutFmt::Text {
        if let Err(e) = write_banner(&mut out, conf.games, conf.moves).and_then(|_| out.flush()) {
            error!("Error writing output: {}", e);
            return Err(());
        }
    }
    let res = match rolls {
        Some(rolls) => simulate_scripted(&conf, rolls),
        None => simulate(&conf),
    };
    let rep = match res {
        Err(e) => {
            error!("{}", e);
            return Err(());
        }
        Ok(rep) => rep,
    };
    let res = match outfmt {
        SimulateOutFmt::Text => write_text(&mut out, &rep),
        SimulateOutFmt::Json => write_json(&mut out, &rep),
        SimulateOutFmt::Table => write_table(&mut out, &rep),
    };
    match res {
        Err(e) => {
            error!("Error writing output: {}", e);
            Err(())
        }
        Ok(_) => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = App::new(crate_name!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("JSON file with simulation settings, overridden by any flags given")
                .global(true),
        )
        .subcommand(
            SubCommand::with_name("simulate")
                .about("Run single-player board game simulations")
                .arg(
                    Arg::with_name("numgames")
                        .long("num-games")
                        .value_name("N")
                        .default_value(conf_def::NUM_GAMES)
                        .validator(|v| validate_as!(u32, v))
                        .help("How many games to simulate"),
                )
                .arg(
                    Arg::with_name("nummoves")
                        .long("num-moves")
                        .value_name("N")
                        .default_value(conf_def::NUM_MOVES)
                        .validator(|v| validate_as!(u32, v))
                        .help("Turns per game"),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .value_name("S")
                        .validator(|v| validate_as!(u64, v))
                        .help("Seed for the dice, random if not given"),
                )
                .arg(
                    Arg::with_name("shuffle")
                        .long("shuffle")
                        .help("Shuffle the chance and chest decks at the start of every game"),
                )
                .arg(
                    Arg::with_name("rolls")
                        .long("rolls")
                        .value_name("FILE")
                        .help("Replay recorded rolls (die faces 1-6, taken in pairs) instead of rolling"),
                )
                .arg(
                    Arg::with_name("outfmt")
                        .long("outfmt")
                        .possible_values(&SimulateOutFmt::variants())
                        .default_value("Text")
                        .case_insensitive(true),
                ),
        )
        .get_matches();
    let res = if let Some(args) = args.subcommand_matches("simulate") {
        run_simulate(args)
    } else {
        error!("Unknown subcommand {:?}", args.subcommand_name());
        Err(())
    };
    if res.is_err() {
        std::process::exit(1);
    }
}
