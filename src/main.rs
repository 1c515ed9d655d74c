//! Prints the key bundle for the command line options, e.g.
//!
//! ```text
//! hdkeys --print --mnemonic "abandon abandon ... about"
//! ```

extern crate hdkeys;
#[macro_use]
extern crate log;
extern crate tracing_subscriber;

use hdkeys::cli::{request_from_options, Options};
use hdkeys::keys::construct_keys;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let options = Options::parse(std::env::args().skip(1));

    let filter = if options.is_set("v") || options.is_set("verbose") {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if !options.is_set("print") {
        warn!("Nothing to do, pass --print to derive keys");
        return;
    }

    let bundle = request_from_options(&options).and_then(|request| construct_keys(&request));
    match bundle {
        Ok(bundle) => println!("{}", bundle),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
