mod debug_report;

use chrono::{DateTime, FixedOffset, Local};
use datewords::{Context, Options, parse_verbose_with};
use std::io::{self, IsTerminal, Read};

const DEBUG_ENV: &str = "DATEWORDS_DEBUG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if std::env::var_os(DEBUG_ENV).is_some() {
        tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(tracing::Level::TRACE).init();
    }

    let ctx = Context::new(config.reference_time);
    let opts = Options { failure_limit: config.failure_limit };
    let res = parse_verbose_with(&config.input, &ctx, &opts);

    if config.verbose {
        debug_report::print_run(&res, config.color);
    }

    match res.result {
        Ok(result) => {
            println!("{}", result.date.format("%Y-%m-%d %H:%M:%S %:z"));
            if !config.verbose {
                eprintln!("matched {} of {} tokens", result.matched_size, res.details.tokens.len());
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    input: String,
    reference_time: DateTime<FixedOffset>,
    failure_limit: usize,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_time = Local::now().fixed_offset();
    let mut failure_limit = Options::default().failure_limit;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("datewords {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = parse_reference(&value)?;
            }
            "--failure-limit" => {
                let value = args.next().ok_or_else(|| "error: --failure-limit expects a value".to_string())?;
                failure_limit = parse_failure_limit(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                reference_time = parse_reference(arg.trim_start_matches("--reference="))?;
            }
            _ if arg.starts_with("--failure-limit=") => {
                failure_limit = parse_failure_limit(arg.trim_start_matches("--failure-limit="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') && !is_negative_number(&arg) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, reference_time, failure_limit, verbose, color })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn is_negative_number(arg: &str) -> bool {
    arg.len() > 1 && arg[1..].chars().all(|c| c.is_ascii_digit())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|_| format!("error: invalid --reference '{value}' (expected RFC 3339, e.g. 2013-02-12T04:30:00Z)"))
}

fn parse_failure_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(format!("error: invalid --failure-limit '{value}' (expected a positive integer)")),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "datewords {version}

Resolve an informal English date expression to a calendar date.

Usage:
  datewords [OPTIONS] [--] <input...>
  datewords [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --reference <timestamp>    Reference time in RFC 3339 (e.g. 2013-02-12T04:30:00Z).
                             Default: the current local time.
  --failure-limit <n>        Consecutive unrecognized words before giving up.
                             Default: {failure_limit}
  -v, --verbose              Print the classification trace.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {debug_env}=1          Emit tracing output on stderr.

Exit codes:
  0  Success.
  1  No date found in the input.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        failure_limit = Options::default().failure_limit,
        debug_env = DEBUG_ENV,
    )
}
