//! Tokenizer and parser for chat commands.

use super::{Command, PredictOptions, PredictTarget};
use crate::genomics::organism::Organism;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Empty command. Type `help` for available commands")]
    Empty,

    #[error("Unknown command '{0}'. Type `help` for available commands")]
    UnknownCommand(String),

    #[error("Please specify what to {command}: `{command} interval ...` or `{command} variant ...`{extra}")]
    MissingTarget {
        command: &'static str,
        extra: &'static str,
    },

    #[error("Unknown {command} type '{target}'. Use {allowed}")]
    UnknownTarget {
        command: &'static str,
        target: String,
        allowed: &'static str,
    },

    #[error("Please provide {what}. Example: `{example}`")]
    MissingArgument {
        what: &'static str,
        example: &'static str,
    },

    #[error("Unknown option '{0}'. Supported: --organism, --outputs, --ontology")]
    UnknownOption(String),

    #[error("Option '{0}' requires a value")]
    MissingOptionValue(String),

    #[error("Option '{0}' lists no values")]
    EmptyOptionList(String),

    #[error("Batch accepts at most {max} items (got {count})")]
    TooManyBatchItems { count: usize, max: usize },

    #[error("{0}")]
    InvalidOrganism(String),

    #[error("'{command}' takes no arguments (got '{argument}')")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
}

/// Upper bound on items in one `batch` command.
pub const MAX_BATCH_ITEMS: usize = 25;

/// Split `a,b , c` into trimmed, non-empty items. A value with no items at
/// all (`,`) is an error rather than a silent fall back to defaults.
fn split_list(option: &str, value: &str) -> Result<Vec<String>, CommandParseError> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        return Err(CommandParseError::EmptyOptionList(option.to_string()));
    }
    Ok(items)
}

/// Separate positional tokens from `--option value` / `--option=value` pairs.
fn split_options<'a>(tokens: &[&'a str]) -> Result<(Vec<&'a str>, PredictOptions), CommandParseError> {
    let mut positional = Vec::new();
    let mut options = PredictOptions::default();
    let mut iter = tokens.iter().copied();

    while let Some(token) = iter.next() {
        if !token.starts_with("--") {
            positional.push(token);
            continue;
        }

        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let name = name.to_lowercase();
        let value = match inline_value {
            Some(v) => v.to_string(),
            None => iter
                .next()
                .filter(|v| !v.starts_with("--"))
                .map(str::to_string)
                .ok_or_else(|| CommandParseError::MissingOptionValue(name.clone()))?,
        };
        if value.trim().is_empty() {
            return Err(CommandParseError::MissingOptionValue(name));
        }

        match name.as_str() {
            "--organism" => {
                options.organism = Some(
                    value
                        .parse::<Organism>()
                        .map_err(CommandParseError::InvalidOrganism)?,
                );
            }
            "--outputs" | "--output-types" => {
                options.output_types.extend(split_list(&name, &value)?)
            }
            "--ontology" | "--ontology-terms" => {
                options.ontology_terms.extend(split_list(&name, &value)?)
            }
            _ => return Err(CommandParseError::UnknownOption(name)),
        }
    }

    Ok((positional, options))
}

fn missing_argument(kind: &str) -> CommandParseError {
    match kind {
        "sequence" => CommandParseError::MissingArgument {
            what: "a DNA sequence",
            example: "predict sequence ATCGATCGATCG",
        },
        "interval" => CommandParseError::MissingArgument {
            what: "an interval",
            example: "predict interval chr22:35677410-36725986",
        },
        _ => CommandParseError::MissingArgument {
            what: "a variant",
            example: "predict variant chr22:36201698:A>C",
        },
    }
}

fn parse_target(
    command: &'static str,
    rest: &[&str],
) -> Result<(PredictTarget, PredictOptions), CommandParseError> {
    let scoring = command == "score";
    let Some((kind, args)) = rest.split_first() else {
        return Err(CommandParseError::MissingTarget {
            command,
            extra: if scoring { "" } else { " or `predict sequence ...`" },
        });
    };

    let kind = kind.to_lowercase();
    let (positional, options) = split_options(args)?;
    // Sequences may be pasted with spaces; the validator strips them.
    let argument = positional.join(" ");

    let target = match kind.as_str() {
        "sequence" | "seq" if !scoring => PredictTarget::Sequence(argument),
        "interval" => PredictTarget::Interval(argument),
        "variant" => PredictTarget::Variant(argument),
        _ => {
            return Err(CommandParseError::UnknownTarget {
                command,
                target: kind,
                allowed: if scoring {
                    "'interval' or 'variant'"
                } else {
                    "'sequence', 'interval' or 'variant'"
                },
            });
        }
    };

    if target.argument().trim().is_empty() {
        return Err(missing_argument(target.kind()));
    }
    Ok((target, options))
}

/// Split `a; b; c` into detected targets.
fn parse_batch(remainder: &str) -> Result<Command, CommandParseError> {
    let items: Vec<PredictTarget> = remainder
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(PredictTarget::detect)
        .collect();
    if items.is_empty() {
        return Err(CommandParseError::MissingArgument {
            what: "one or more items separated by ';'",
            example: "batch chr22:36201698:A>C; chr1:1000-2000",
        });
    }
    if items.len() > MAX_BATCH_ITEMS {
        return Err(CommandParseError::TooManyBatchItems {
            count: items.len(),
            max: MAX_BATCH_ITEMS,
        });
    }
    Ok(Command::Batch { items })
}

fn expect_no_arguments(command: &'static str, rest: &[&str]) -> Result<(), CommandParseError> {
    match rest.first() {
        None => Ok(()),
        Some(_) => Err(CommandParseError::UnexpectedArgument {
            command,
            argument: rest.join(" "),
        }),
    }
}

/// Parse one line of user input. Keywords are case-insensitive and a leading
/// `/` is ignored, so `/help` and `HELP` both work.
pub fn parse_command(input: &str) -> Result<Command, CommandParseError> {
    let input = input.trim();
    let input = input.strip_prefix('/').unwrap_or(input).trim_start();
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((head, rest)) = tokens.split_first() else {
        return Err(CommandParseError::Empty);
    };

    match head.to_lowercase().as_str() {
        "predict" => {
            let (target, options) = parse_target("predict", rest)?;
            Ok(Command::Predict { target, options })
        }
        "score" => {
            let (target, options) = parse_target("score", rest)?;
            Ok(Command::Score { target, options })
        }
        "setup" => match rest {
            [key] => Ok(Command::Setup {
                api_key: key.to_string(),
            }),
            [] => Err(CommandParseError::MissingArgument {
                what: "your API key",
                example: "setup AIza...",
            }),
            _ => Err(CommandParseError::UnexpectedArgument {
                command: "setup",
                argument: rest[1..].join(" "),
            }),
        },
        // `head` is a prefix of `input`, so the rest keeps its original spacing.
        "batch" => parse_batch(&input[head.len()..]),
        "metadata" => expect_no_arguments("metadata", rest).map(|_| Command::Metadata),
        "status" => expect_no_arguments("status", rest).map(|_| Command::Status),
        "help" | "?" => Ok(Command::Help),
        "examples" => Ok(Command::Examples),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}
