use std::{error::Error, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use dmsconv_types::{
    decimal_to_dms, dms_to_decimal, validate_decimal, validate_dms_with, DecimalPosition,
    DmsPosition, DmsValue, LatitudeDirection, LatitudeDms, LongitudeDirection, LongitudeDms,
    ParseCoordinateError, RangeCheck,
};
use log::{info, LevelFilter};

const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace); `RUST_LOG` overrides it.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert signed decimal degrees into degrees, minutes and seconds.
    #[command(allow_negative_numbers = true)]
    ToDms {
        latitude: f64,
        longitude: f64,
        /// Use the degree, arcminute and arcsecond signs.
        #[arg(long)]
        unicode: bool,
        /// Fraction digits of the arc seconds.
        #[arg(long, default_value_t = 3)]
        precision: usize,
    },
    /// Convert degrees, minutes and seconds (e.g. 62°17′41.332″N) into decimal degrees.
    ToDecimal {
        latitude: LatitudeDms,
        longitude: LongitudeDms,
        /// Fraction digits of the decimal degrees.
        #[arg(long)]
        precision: Option<usize>,
    },
    /// Check that decimal degrees are in range.
    #[command(allow_negative_numbers = true)]
    CheckDecimal { latitude: f64, longitude: f64 },
    /// Check that a DMS position is in range.
    CheckDms {
        latitude: String,
        longitude: String,
        /// The longitude degrees limit to apply.
        #[arg(long, value_enum, default_value_t = Strictness::Reference)]
        range_check: Strictness,
    },
    /// Run the built-in reference conversions and report how many passed.
    SelfTest,
}

#[derive(Copy, Clone, ValueEnum)]
enum Strictness {
    /// Longitude degrees up to 90.
    Reference,
    /// Longitude degrees up to 180.
    Geographic,
}

impl From<Strictness> for RangeCheck {
    fn from(strictness: Strictness) -> Self {
        match strictness {
            Strictness::Reference => Self::Reference,
            Strictness::Geographic => Self::Geographic,
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_validity(valid: bool) -> ExitCode {
    if valid {
        println!("valid");
        ExitCode::SUCCESS
    } else {
        println!("invalid");
        ExitCode::from(EXIT_INVALID)
    }
}

/// Parse the position leaving the range check to the caller
fn parse_dms_position(
    latitude: &str,
    longitude: &str,
) -> Result<DmsPosition, ParseCoordinateError> {
    Ok(DmsPosition::new(
        LatitudeDms::parse_unchecked(latitude)?,
        LongitudeDms::parse_unchecked(longitude)?,
    ))
}

struct ReferenceCase {
    name: &'static str,
    run: fn() -> bool,
}

fn decimal_to_dms_case() -> bool {
    let decimal = DecimalPosition::new(37.443_218_67, -127.775_334);
    match decimal_to_dms(decimal) {
        Ok(dms) => {
            println!("{dms}");
            dms.latitude.degrees == 37
                && dms.latitude.direction == LatitudeDirection::North
                && dms.longitude.degrees == 127
                && dms.longitude.direction == LongitudeDirection::West
        }
        Err(err) => {
            println!("{err}");
            false
        }
    }
}

fn dms_to_decimal_case() -> bool {
    let dms = DmsPosition::new(
        DmsValue::new(62, 17.0, 41.332, LatitudeDirection::North),
        DmsValue::new(124, 38.0, 7.332, LongitudeDirection::East),
    );
    match dms_to_decimal(dms) {
        Ok(decimal) => {
            println!("{decimal}");
            (decimal.latitude - 62.294_814).abs() < 1e-6
                && (decimal.longitude - 124.635_370).abs() < 1e-6
        }
        Err(err) => {
            println!("{err}");
            false
        }
    }
}

fn self_test() -> ExitCode {
    let cases = [
        ReferenceCase {
            name: "DecToDMS Test 1",
            run: decimal_to_dms_case,
        },
        ReferenceCase {
            name: "DMSToDec Test 1",
            run: dms_to_decimal_case,
        },
    ];

    let mut fails = 0_usize;
    for case in &cases {
        if (case.run)() {
            println!("{} PASSED", case.name);
        } else {
            println!("{} FAILED", case.name);
            fails += 1;
        }
    }

    println!("{} passed, {} failed", cases.len() - fails, fails);
    if fails == 0 {
        println!("All tests passed.");
        ExitCode::SUCCESS
    } else {
        println!("TESTS FAILED!");
        ExitCode::from(EXIT_INVALID)
    }
}

fn run(command: Commands) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Commands::ToDms {
            latitude,
            longitude,
            unicode,
            precision,
        } => {
            let decimal = DecimalPosition::new(latitude, longitude);
            info!("Converting {decimal} to DMS");
            let dms = decimal_to_dms(decimal)?;
            if unicode {
                println!("{dms:#.precision$}");
            } else {
                println!("{dms:.precision$}");
            }
        }
        Commands::ToDecimal {
            latitude,
            longitude,
            precision,
        } => {
            let dms = DmsPosition::new(latitude, longitude);
            info!("Converting {dms} to decimal");
            let decimal = dms_to_decimal(dms)?;
            match precision {
                Some(precision) => println!("{decimal:.precision$}"),
                None => println!("{decimal}"),
            }
        }
        Commands::CheckDecimal {
            latitude,
            longitude,
        } => {
            return Ok(print_validity(validate_decimal(DecimalPosition::new(
                latitude, longitude,
            ))));
        }
        Commands::CheckDms {
            latitude,
            longitude,
            range_check,
        } => {
            let position = parse_dms_position(&latitude, &longitude)?;
            info!("Checking {position:#}");
            return Ok(print_validity(validate_dms_with(
                position,
                range_check.into(),
            )));
        }
        Commands::SelfTest => return Ok(self_test()),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
