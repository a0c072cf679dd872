use std::io::Write;
use std::path::PathBuf;

#[cfg(test)]
use std::ffi::OsString;

use crate::Result;

use clap::{crate_version, Arg, ArgMatches};
use loosedump::on_disk::{self, Options};
use thiserror::Error;
use tracing::{debug, info};

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("loosedump")
        .version(crate_version!())
        .about("Decode and print every loose git object found below a directory")
        .arg(
            Arg::with_name("root")
                .required(true)
                .value_name("ROOT")
                .help("Directory to search for object files (e.g. .git/objects)"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log skipped files and decoded objects to stderr"),
        )
        .arg(
            Arg::with_name("no-verify-ids")
                .long("no-verify-ids")
                .help("Don't check that objects hash to the ID their path implies"),
        )
}

/// Returned when one or more objects could not be decoded.
/// Every other object has still been printed.
#[derive(Debug, Error)]
#[error("{failed} of {total} objects could not be decoded")]
pub(crate) struct DecodeFailures {
    pub failed: usize,
    pub total: usize,
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn run(&mut self) -> Result<()> {
        let root = match self.arg_matches.value_of_os("root") {
            Some(root) => PathBuf::from(root),
            None => return Err("no root directory given".into()),
        };

        let options = Options {
            verify_ids: !self.arg_matches.is_present("no-verify-ids"),
        };

        if !root.is_dir() {
            return Err(format!("{}: not a directory", root.display()).into());
        }

        let found = on_disk::find_objects(&root);
        let mut failed = 0;

        for item in &found {
            let path = match item {
                Ok(path) => path,
                Err(err) => {
                    failed += 1;
                    debug!(error = %err, "unable to read directory");
                    writeln!(self.stderr, "ERROR: {}", err)?;
                    continue;
                }
            };

            match on_disk::dump_object(path, &options) {
                Ok(record) => {
                    writeln!(self, "{}", path.display())?;
                    writeln!(self, "{}", record)?;
                }
                Err(err) => {
                    failed += 1;
                    debug!(path = %path.display(), error = %err, "unable to decode object");
                    writeln!(self.stderr, "ERROR: {}: {}", path.display(), err)?;
                }
            }
        }

        info!(objects = found.len(), failed, "finished");

        if failed > 0 {
            Err(DecodeFailures {
                failed,
                total: found.len(),
            }
            .into())
        } else {
            Ok(())
        }
    }

    // Returns the result of the run along with everything written to
    // stdout and stderr.
    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> (Result<()>, String, String)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("loosedump"));

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let r = match clap_app().get_matches_from_safe(args) {
            Ok(arg_matches) => App {
                arg_matches,
                stdout: &mut stdout,
                stderr: &mut stderr,
            }
            .run(),
            Err(err) => Err(err.into()),
        };

        (
            r,
            String::from_utf8_lossy(&stdout).into_owned(),
            String::from_utf8_lossy(&stderr).into_owned(),
        )
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}
