//! Chat command grammar.
//!
//! Commands are the text a user types in the chat REPL or passes to the
//! one-shot CLI. [`Command::parse`] only recognizes the shape of a command;
//! coordinate and sequence arguments are kept as raw text and checked later
//! by the [`InputValidator`](crate::validation::InputValidator).
//!
//! ```text
//! predict sequence <SEQ>            [--organism O] [--outputs a,b] [--ontology T,..]
//! predict interval <chr:start-end>  [options]
//! predict variant  <chr:pos:ref>alt> [options]
//! score interval <chr:start-end>
//! score variant  <chr:pos:ref>alt>
//! batch <item>; <item>; ...
//! metadata | status | help | examples | setup <API_KEY>
//! ```

pub mod parsing;

pub use parsing::CommandParseError;

use crate::genomics::organism::Organism;

/// What a `predict` or `score` command operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictTarget {
    Sequence(String),
    Interval(String),
    Variant(String),
}

impl PredictTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            PredictTarget::Sequence(_) => "sequence",
            PredictTarget::Interval(_) => "interval",
            PredictTarget::Variant(_) => "variant",
        }
    }

    /// Classify a bare batch item by its delimiters: `:` and `-` without `>`
    /// is an interval, `:` with `>` is a variant, anything else a sequence.
    pub fn detect(item: &str) -> Self {
        let item = item.trim().to_string();
        let has_colon = item.contains(':');
        if has_colon && item.contains('>') {
            PredictTarget::Variant(item)
        } else if has_colon && item.contains('-') {
            PredictTarget::Interval(item)
        } else {
            PredictTarget::Sequence(item)
        }
    }

    /// The raw argument text.
    pub fn argument(&self) -> &str {
        match self {
            PredictTarget::Sequence(s) | PredictTarget::Interval(s) | PredictTarget::Variant(s) => s,
        }
    }
}

/// `--organism`, `--outputs` and `--ontology` as typed by the user.
///
/// Output types and ontology terms stay unvalidated strings here; empty
/// lists mean "use the session defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictOptions {
    pub organism: Option<Organism>,
    pub output_types: Vec<String>,
    pub ontology_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Predict {
        target: PredictTarget,
        options: PredictOptions,
    },
    /// Always an interval or a variant target.
    Score {
        target: PredictTarget,
        options: PredictOptions,
    },
    /// Several targets, each validated and predicted on its own.
    Batch {
        items: Vec<PredictTarget>,
    },
    Metadata,
    Status,
    Help,
    Examples,
    Setup {
        api_key: String,
    },
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandParseError> {
        parsing::parse_command(input)
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Predict { .. } => "predict",
            Command::Score { .. } => "score",
            Command::Batch { .. } => "batch",
            Command::Metadata => "metadata",
            Command::Status => "status",
            Command::Help => "help",
            Command::Examples => "examples",
            Command::Setup { .. } => "setup",
        }
    }

    /// Whether the command needs a configured API key to run.
    pub fn requires_api_key(&self) -> bool {
        matches!(
            self,
            Command::Predict { .. }
                | Command::Score { .. }
                | Command::Batch { .. }
                | Command::Metadata
        )
    }
}

/// `(usage, description)` pairs for every command, in help order.
pub const COMMAND_REFERENCE: &[(&str, &str)] = &[
    ("setup <API_KEY>", "Configure your API key for this session"),
    ("status", "Check current configuration"),
    ("predict sequence <DNA_SEQUENCE>", "Predict from DNA sequence"),
    ("predict interval chr:start-end", "Predict from genomic interval"),
    ("predict variant chr:pos:ref>alt", "Analyze variant effects"),
    ("score interval chr:start-end", "Score genomic interval"),
    ("score variant chr:pos:ref>alt", "Score variant effects"),
    (
        "batch <item>; <item>; ...",
        "Validate and predict several sequences, intervals or variants",
    ),
    ("metadata", "List the output tracks the backend provides"),
    ("examples", "Show example commands"),
    ("help", "Show this help message"),
];

/// Example invocations shown by the `examples` command.
pub const EXAMPLE_COMMANDS: &[(&str, &str)] = &[
    (
        "predict sequence ATCGATCGATCGATCGATCGATCGATCGATCGATCG",
        "Gene expression and chromatin accessibility for a short sequence",
    ),
    (
        "predict interval chr22:35677410-36725986",
        "Regulatory activity across a ~1 Mb region",
    ),
    (
        "predict variant chr22:36201698:A>C",
        "Reference vs alternate comparison for a single-nucleotide variant",
    ),
    ("score interval chr1:1000000-1100000", "Score a 100 kb interval"),
    ("score variant chr22:36201698:A>C", "Score a variant's effect"),
    (
        "batch chr22:36201698:A>C; chr1:1000000-1100000; ATCGATCGATCG",
        "Process a variant, an interval and a sequence in one go",
    ),
    (
        "predict sequence ATCGATCGATCG --organism mouse",
        "Use the mouse reference",
    ),
    (
        "predict interval chr1:1000-2000 --outputs rna_seq,atac_seq",
        "Request specific output tracks",
    ),
    (
        "predict variant chr1:1000:A>T --ontology UBERON:0001157",
        "Restrict to a tissue ontology term",
    ),
];
