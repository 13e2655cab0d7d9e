mod debug_report;

use digify::{DEFAULT_LOCALE, DurationTranslator, NumberTranslator, TokenSequence, supported_locales};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let run = match run_translation(&config) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    debug_report::print_run(&run, config.color);
}

struct CliConfig {
    input: String,
    locale: Option<String>,
    durations: bool,
    color: bool,
}

fn run_translation(config: &CliConfig) -> Result<TokenSequence, String> {
    if config.durations {
        let mut translator = DurationTranslator::new();
        if let Some(locale) = &config.locale {
            translator.set_locale(locale).map_err(|err| format!("error: {err}"))?;
        }
        Ok(translator.translate(&config.input))
    } else {
        let mut translator = NumberTranslator::new();
        if let Some(locale) = &config.locale {
            translator.set_locale(locale).map_err(|err| format!("error: {err}"))?;
        }
        Ok(translator.translate(&config.input))
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut locale: Option<String> = None;
    let mut durations = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("digify {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--durations" => durations = true,
            "--locale" => {
                let value = args.next().ok_or_else(|| "error: --locale expects a value".to_string())?;
                locale = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--locale=") => {
                let value = arg.trim_start_matches("--locale=");
                locale = Some(value.to_string());
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
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

    Ok(CliConfig { input, locale, durations, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "digify {version}

Rewrites natural-language numbers and durations as digits.

Usage:
  digify [OPTIONS] [--] <input...>
  digify [OPTIONS] --input <text>

Options:
  -i, --input <text>   Input text to translate. If omitted, reads remaining args
                       or stdin when no args are provided.
  --locale <id>        Locale for the run ({locales}). Default: {default_locale}
  --durations          Recognize durations as well as numbers.
  --color              Force ANSI color output.
  --no-color           Disable ANSI color output.
  -h, --help           Show this help message.
  -V, --version        Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        locales = supported_locales().join(", "),
        default_locale = DEFAULT_LOCALE
    )
}
