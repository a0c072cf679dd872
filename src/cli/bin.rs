use std::{
    error::Error,
    io::{self, Write},
};

mod app;
pub(crate) use app::App;

mod logging;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[allow(unused_must_use)]
#[cfg(not(tarpaulin_include))]
fn main() {
    // The actual executable (main fn) doesn't seem to be reachable via Tarpaulin.
    // We put as little as possible into this function so we can reach the rest via
    // other test coverage.

    let arg_matches = app::clap_app().get_matches();

    if let Err(err) = logging::init(arg_matches.is_present("verbose")) {
        eprintln!("WARNING: logging disabled: {}", err);
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let stderr = io::stderr();
    let mut stderr = stderr.lock();

    let mut app = App {
        arg_matches,
        stdout: &mut stdout,
        stderr: &mut stderr,
    };

    let r = app.run();

    app.flush();
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}
