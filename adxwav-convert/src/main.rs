// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use adxwav_convert::{convert, ConvertOptions};

use clap::{Arg, ArgAction};
use log::error;

fn main() {
    pretty_env_logger::init();

    let matches = clap::Command::new("adx2wav")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a CRI ADX stream to a 16-bit PCM WAVE file")
        .after_help(
            "If OUTPUT is omitted, it is INPUT with its extension replaced by .wav. A failure \
             while decoding may leave a partial OUTPUT file behind.",
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Do not print the stream summary"),
        )
        .arg(Arg::new("INPUT").help("The input ADX file path").required(true).index(1))
        .arg(Arg::new("OUTPUT").help("The output WAVE file path").index(2))
        .get_matches();

    let input = matches.get_one::<String>("INPUT").map(PathBuf::from).unwrap_or_default();
    let output = matches.get_one::<String>("OUTPUT").map(PathBuf::from);

    let mut opts = ConvertOptions::new(input, output);
    opts.quiet = matches.get_flag("quiet");

    if let Err(err) = convert(&opts) {
        error!("conversion of {} failed: {:?}", opts.input.display(), err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
