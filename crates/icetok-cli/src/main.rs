//! Command-line driver for icetok.

mod error;
mod tracing_setup;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use error::CliError;
use icetok::prelude::*;

/// Tokenize Icelandic text.
#[derive(Parser)]
#[command(name = "icetok")]
#[command(about = "A streaming tokenizer for Icelandic text", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file to read (UTF-8).
    infile: PathBuf,
    /// Output file to write (UTF-8).
    outfile: PathBuf,

    /// Emit one CSV record per token: `kind,"txt","val"`.
    #[arg(long, conflicts_with_all = ["json", "moses"])]
    csv: bool,
    /// Emit one JSON object per line: `{"k": ..., "t": ..., "v": ...}`.
    #[arg(long, conflicts_with_all = ["csv", "moses"])]
    json: bool,
    /// Emit Moses-style detokenized output, one sentence per line, with
    /// no further normalization.
    #[arg(long, conflicts_with_all = ["csv", "json"])]
    moses: bool,

    /// Force a sentence boundary at every newline, in addition to
    /// punctuation-driven boundaries.
    #[arg(short = 'o', long = "one-sentence-per-line")]
    one_sentence_per_line: bool,
    /// Coalesce a number immediately followed by a percent word into a
    /// single PERCENT token.
    #[arg(long)]
    coalesce_percent: bool,
    /// Normalize phone numbers to `NNN-NNNN`.
    #[arg(long)]
    convert_telnos: bool,
    /// Rewrite English-style number punctuation to Icelandic convention.
    #[arg(long)]
    convert_numbers: bool,
    /// Canonicalize `200° C` / `200°C` to `200 °C` before unit conversion.
    #[arg(long)]
    convert_measurements: bool,
    /// Leave composite glyphs (ligatures, precomposed forms) alone
    /// instead of decomposing them during preprocessing.
    #[arg(long)]
    keep_composite_glyphs: bool,
    /// When splitting into sentences, join each token's original surface
    /// text instead of its cooked form.
    #[arg(long)]
    original: bool,
    /// How to handle kludgy ordinals (`1sti`, `4ra`, ...).
    #[arg(long, value_enum, default_value_t = KludgyOrdinalsArg::PassThrough)]
    handle_kludgy_ordinals: KludgyOrdinalsArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KludgyOrdinalsArg {
    PassThrough,
    Modify,
    Translate,
}

impl std::fmt::Display for KludgyOrdinalsArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            KludgyOrdinalsArg::PassThrough => "pass-through",
            KludgyOrdinalsArg::Modify => "modify",
            KludgyOrdinalsArg::Translate => "translate",
        };
        f.write_str(s)
    }
}

impl From<KludgyOrdinalsArg> for KludgyOrdinals {
    fn from(arg: KludgyOrdinalsArg) -> Self {
        match arg {
            KludgyOrdinalsArg::PassThrough => KludgyOrdinals::PassThrough,
            KludgyOrdinalsArg::Modify => KludgyOrdinals::Modify,
            KludgyOrdinalsArg::Translate => KludgyOrdinals::Translate,
        }
    }
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            replace_composite_glyphs: !self.keep_composite_glyphs,
            convert_numbers: self.convert_numbers,
            convert_telnos: self.convert_telnos,
            convert_measurements: self.convert_measurements,
            coalesce_percent: self.coalesce_percent,
            handle_kludgy_ordinals: self.handle_kludgy_ordinals.into(),
            one_sent_per_line: self.one_sentence_per_line,
            original: self.original,
            ..Options::default()
        }
    }
}

fn main() {
    tracing_setup::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("icetok: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = fs::read_to_string(&cli.infile).map_err(|source| CliError::Read { path: cli.infile.clone(), source })?;
    let opts = cli.options();
    let tokens = tokenize(&input, opts);
    tracing::debug!(tokens = tokens.len(), "tokenized input");

    let rendered = if cli.csv {
        render_csv(&tokens)
    } else if cli.json {
        render_json(&tokens)
    } else if cli.moses {
        render_sentences(&tokens, false)
    } else {
        render_sentences(&tokens, true)
    };

    let mut file = fs::File::create(&cli.outfile).map_err(|source| CliError::Write { path: cli.outfile.clone(), source })?;
    file.write_all(rendered.as_bytes()).map_err(|source| CliError::Write { path: cli.outfile.clone(), source })?;
    Ok(())
}

fn render_csv(tokens: &[Tok]) -> String {
    let mut out = String::new();
    for tok in tokens {
        if tok.kind.is_structural() {
            continue;
        }
        out.push_str(&format!("{},{:?},{:?}\n", tok.kind.name(), tok.txt, tok.val));
    }
    out
}

fn render_json(tokens: &[Tok]) -> String {
    let mut out = String::new();
    for tok in tokens {
        if tok.kind.is_structural() {
            continue;
        }
        let line = serde_json::json!({
            "k": tok.kind.name(),
            "t": tok.txt,
            "v": serde_json::to_value(&tok.val).unwrap_or(serde_json::Value::Null),
        });
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Detokenizes each `S_BEGIN`..`S_END` run on its own line. The default
/// output normalizes typography; `--moses` is the same grouping without
/// normalization.
fn render_sentences(tokens: &[Tok], normalize: bool) -> String {
    let mut out = String::new();
    let mut current: Vec<Tok> = Vec::new();
    for tok in tokens {
        match tok.kind {
            Kind::SBegin => current.clear(),
            Kind::SEnd => {
                out.push_str(&detokenize(&current, normalize));
                out.push('\n');
            }
            _ => current.push(tok.clone()),
        }
    }
    out
}
