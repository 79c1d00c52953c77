// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::io;
use std::process;

use chequer::{Config, ConfigError, ConsoleServer, OutputFormat};
use clap::{App, Arg, ArgMatches};

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("layout")
                .help("Starting layout: standard, knights, pawns, or a numeric selector")
                .value_name("LAYOUT")
                .short("-l")
                .long("--layout")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("config")
                .help("JSON config file (defaults to chequer.json if present)")
                .value_name("FILE")
                .short("-c")
                .long("--config")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("json")
                .help("Write one JSON snapshot per turn instead of the board")
                .long("--json"),
        )
        .get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let svr = ConsoleServer::new(&config);
    if let Err(err) = svr.run(stdin.lock(), stdout.lock()) {
        println!("i/o error: {}", err);
        process::exit(1);
    }
}

// Command line beats the config file, which beats the defaults.
fn load_config(matches: &ArgMatches) -> Result<Config, ConfigError> {
    let mut config = match matches.value_of("config") {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?.unwrap_or_default(),
    };

    if let Some(layout) = matches.value_of("layout") {
        config.set_layout(layout)?;
    }

    if matches.is_present("json") {
        config.output = OutputFormat::Json;
    }

    Ok(config)
}
