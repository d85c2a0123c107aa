// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate newton;
extern crate num_cpus;

use clap::{value_t, App, Arg, ArgMatches};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use newton::config::size_fits;
use newton::polynomial::{MAX_DEGREE, MIN_DEGREE};
use newton::{Config, FractalError};

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
const THREADS: &str = "threads";
const DEGREE: &str = "degree";

fn app<'a, 'b>(default_threads: &'a str) -> App<'a, 'b> {
    App::new("newton")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Newton fractal renderer for x^n - 1")
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse thread count",
                        "Thread count must be at least 1",
                    )
                })
                .help("Number of worker threads"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("l")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse picture size",
                        "Picture size must be at least 1",
                    )?;
                    match usize::from_str(&s) {
                        Ok(size) if size_fits(size) => Ok(()),
                        _ => Err("Picture size is too large".to_string()),
                    }
                })
                .help("Width and height of the output images, in pixels"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(".")
                .help("Directory to write the images into"),
        )
        .arg(
            Arg::with_name(DEGREE)
                .required(true)
                .index(1)
                .validator(|s| {
                    validate_range(
                        &s,
                        MIN_DEGREE,
                        MAX_DEGREE,
                        "Could not parse polynomial degree",
                        &format!(
                            "Polynomial degree must be between {} and {}",
                            MIN_DEGREE, MAX_DEGREE
                        ),
                    )
                })
                .help("Degree n of the polynomial x^n - 1"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), FractalError> {
    let degree = value_t!(matches, DEGREE, u32).unwrap_or_else(|e| e.exit());
    let size = value_t!(matches, SIZE, usize).unwrap_or_else(|e| e.exit());
    let threads = value_t!(matches, THREADS, usize).unwrap_or_else(|e| e.exit());
    let output = Path::new(matches.value_of(OUTPUT).unwrap_or("."));

    let config = Config::new(degree, size, threads)?;
    fs::create_dir_all(output)
        .map_err(|e| FractalError::Io(output.display().to_string(), e))?;
    let grid = newton::render(&config)?;
    newton::ppm::write_images(output, config.degree(), &grid)?;
    Ok(())
}

fn main() {
    env_logger::init();
    let default_threads = num_cpus::get().to_string();
    let matches = app(&default_threads).get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
