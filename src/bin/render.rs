// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dejong::{Config, Parameters, Session};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<usize>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        Some(_) => Err("Image size must be at least 1x1".to_string()),
        None => Err("Could not parse output image size".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const SEED: &str = "seed";
const PARAMS: &str = "params";

fn args<'a>() -> ArgMatches<'a> {
    App::new("dejong-render")
        .version("0.1.0")
        .about("Renders a Peter de Jong attractor to an image file")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("640x640")
                .validator(|s| validate_size(&s))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000000",
                    )
                })
                .help("Number of samples to draw"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .takes_value(true)
                .validator(|s| {
                    u64::from_str(&s)
                        .map(|_| ())
                        .map_err(|_| "Could not parse seed".to_string())
                })
                .help("Seed for the parameter draw"),
        )
        .arg(
            Arg::with_name(PARAMS)
                .required(false)
                .long(PARAMS)
                .short("p")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| {
                    Parameters::from_str(&s)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .help("Explicit parameters as a,b,c,d; overrides --seed"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    // Validators have already vetted every value below.
    let (width, height) = parse_pair(matches.value_of(SIZE).unwrap_or("640x640"), 'x')
        .unwrap_or((dejong::config::WIDTH, dejong::config::HEIGHT));
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap_or("1000000"))?;
    let config = Config {
        width,
        height,
        iterations,
        ..Config::default()
    };

    let session = match (matches.value_of(PARAMS), matches.value_of(SEED)) {
        (Some(params), _) => Session::with_parameters(config, Parameters::from_str(params)?)?,
        (None, Some(seed)) => {
            Session::new(config, &mut StdRng::seed_from_u64(u64::from_str(seed)?))?
        }
        (None, None) => Session::new(config, &mut rand::thread_rng())?,
    };

    let output = matches.value_of(OUTPUT).unwrap_or("dejong.png");
    session.buffer().save(output)?;
    info!("wrote {} to {}", session.parameters(), output);
    println!("{}", session.parameters());
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
