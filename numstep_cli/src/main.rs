// © 2024, The numstep Developers and Contributors
//
// This Source Code Form is subject to the terms of the BSD-3-clause License.
// If a copy of the BSD-3-clause license was not distributed with this
// file, You can obtain one at https://opensource.org/license/bsd-3-clause/.

use std::io::{self, BufWriter, Write};
use std::str::FromStr;
use std::{env, process};

use derive_more::Display;
use indoc::indoc;
use itertools::Itertools;
use log::{debug, info, warn};
use numstep::{Number, StepError, StepSeq};

const USAGE: &str = indoc! {"
    usage: numstep START STOP [STEP]

    Prints the numbers from START towards STOP, advancing by STEP (default 1).
    Numbers are integers, decimals, `inf` or `-inf`. Settings are read from
    NumStep.toml, the file named by NUMSTEP_CONFIG, and NUMSTEP_* variables.
"};

/// Errors of the command line front end.
#[derive(Debug, Display)]
enum CliError {
    #[display("{}", _0)]
    Step(StepError),
    #[display("expected START STOP [STEP], got {} argument(s)", _0)]
    ArgCount(usize),
    #[display("unknown output format: {}", _0)]
    UnknownFormat(String),
    #[display("could not write output: {}", _0)]
    Io(io::Error),
    #[display("could not encode output: {}", _0)]
    Json(serde_json::Error),
}

impl CliError {
    /// Exit code: 2 for usage errors, 1 otherwise.
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Step(_) | Self::ArgCount(_) | Self::UnknownFormat(_) => 2,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

impl From<StepError> for CliError {
    fn from(x: StepError) -> Self {
        Self::Step(x)
    }
}

impl From<io::Error> for CliError {
    fn from(x: io::Error) -> Self {
        Self::Io(x)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(x: serde_json::Error) -> Self {
        Self::Json(x)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnknownFormat(s.to_owned())),
        }
    }
}

/// Turn `START STOP [STEP]` into a sequence.
fn parse_args<I>(args: I) -> Result<StepSeq<Number>, CliError>
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.collect();
    let numbers = args.iter().map(|a| a.parse::<Number>()).collect::<Result<Vec<_>, _>>()?;

    match numbers[..] {
        [start, stop] => Ok(numstep::step_by_one(start, stop)?),
        [start, stop, step] => Ok(numstep::step(start, stop, step)?),
        _ => Err(CliError::ArgCount(numbers.len())),
    }
}

/// Write the elements of `seq` to `out` as they are produced.
///
/// Returns whether `limit` cut the sequence short; a `limit` of zero writes every element.
fn render<W: Write>(
    out: &mut W,
    seq: &StepSeq<Number>,
    format: OutputFormat,
    separator: &str,
    limit: usize,
) -> Result<bool, CliError> {
    let cap = if limit == 0 { usize::MAX } else { limit };
    let mut values = seq.iter();

    match format {
        OutputFormat::Plain => write!(out, "{}", values.by_ref().take(cap).format(separator))?,
        OutputFormat::Json => {
            out.write_all(b"[")?;
            for (i, value) in values.by_ref().take(cap).enumerate() {
                if i > 0 {
                    out.write_all(b",")?;
                }
                serde_json::to_writer(&mut *out, &value)?;
            }
            out.write_all(b"]")?;
        },
    }

    let truncated = limit != 0 && values.next().is_some();
    if truncated {
        warn!("output truncated after {} elements", limit);
    }
    Ok(truncated)
}

fn run<I>(args: I) -> Result<(), CliError>
where
    I: Iterator<Item = String>,
{
    let seq = parse_args(args)?;
    let format: OutputFormat = stepconfig::format().parse()?;
    let limit = usize::try_from(stepconfig::limit()).unwrap_or(usize::MAX);
    debug!("settings: {}", stepconfig::dump());

    let mut out = BufWriter::new(io::stdout().lock());
    let truncated = render(&mut out, &seq, format, &stepconfig::separator(), limit)?;
    writeln!(out)?;
    out.flush()?;

    if truncated && !stepconfig::quiet() {
        eprintln!("numstep: stopped after {} elements (set NUMSTEP_LIMIT=0 to lift the cap)", limit);
    }
    info!("done stepping from {} to {}", seq.start(), seq.stop());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(env::args().skip(1)) {
        eprintln!("numstep: {}", err);
        if err.exit_code() == 2 {
            eprint!("{}", USAGE);
        }
        process::exit(err.exit_code());
    }
}
