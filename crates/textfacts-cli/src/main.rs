use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use anyhow::Context;
use tabwriter::TabWriter;
use textfacts_io::prelude::*;

#[derive(Debug, Parser)]
#[command(
    name = "textfacts",
    version,
    about = "Deterministic Unicode bidi facts for one paragraph of text",
    after_help = "Exit codes: 0 success, 1 I/O or input error, 2 has-controls found no controls."
)]
struct Cli {
    /// Log resolver diagnostics to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve embedding levels, runs and visual order as a JSON report.
    Resolve {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        opts: OptionArgs,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Exit 0 if the text contains bidi formatting controls, 2 if not.
    HasControls {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print one tab-separated row per scalar: index, code point, class, level, visual index.
    Inspect {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        opts: OptionArgs,
        /// Pad columns with spaces instead of tabs
        #[arg(long)]
        align: bool,
    },
    /// Print the SHA-256 digest of the resolution's canonical JSON.
    Digest {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        opts: OptionArgs,
        /// Print the cache key for text and options instead
        #[arg(long)]
        key: bool,
    },
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Text to resolve; reads --file or stdin when omitted
    text: Option<String>,
    /// Read the paragraph from a UTF-8 file
    #[arg(long, conflicts_with = "text")]
    file: Option<String>,
}

#[derive(Debug, Args)]
struct OptionArgs {
    /// Options JSON file; flags below override its values
    #[arg(long)]
    options: Option<String>,
    /// Paragraph direction: auto, ltr or rtl
    #[arg(long)]
    direction: Option<ParagraphDirection>,
    /// Skip paired-bracket resolution (rule N0)
    #[arg(long)]
    no_brackets: bool,
    /// Code units for reported spans: utf16 or utf8
    #[arg(long)]
    code_unit: Option<CodeUnit>,
    /// Include the per-sequence debug trace
    #[arg(long)]
    debug: bool,
}

impl InputArgs {
    /// The paragraph text. One trailing line terminator is dropped from
    /// file and stdin input.
    fn read(&self) -> anyhow::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let bytes = match &self.file {
            Some(path) => fs::read(path).with_context(|| format!("read {path}"))?,
            None => {
                let mut buf = Vec::new();
                io::stdin().read_to_end(&mut buf).context("read stdin")?;
                buf
            }
        };
        let mut text = String::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8 {
            offset: e.utf8_error().valid_up_to(),
        })?;
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}

impl OptionArgs {
    fn resolve_options(&self) -> anyhow::Result<ResolveOptions> {
        let mut opts = match &self.options {
            Some(path) => {
                let s = fs::read_to_string(path).with_context(|| format!("read {path}"))?;
                parse_options_json_str(&s).with_context(|| format!("parse {path}"))?
            }
            None => ResolveOptions::default(),
        };
        if let Some(direction) = self.direction {
            opts.paragraph_direction = direction;
        }
        if self.no_brackets {
            opts.use_bracket_pairs = false;
        }
        if let Some(unit) = self.code_unit {
            opts.code_unit = unit;
        }
        if self.debug {
            opts.debug = true;
        }
        Ok(opts)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.cmd {
        Command::Resolve { input, opts, min } => {
            let text = input.read()?;
            let opts = opts.resolve_options()?;
            let report = ResolutionReport::build_str(&text, &opts);

            let out = if min {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{out}");
        }
        Command::HasControls { input } => {
            let text = input.read()?;
            if has_bidi_controls(&text) {
                println!("true");
            } else {
                println!("false");
                process::exit(2);
            }
        }
        Command::Inspect { input, opts, align } => {
            let text = input.read()?;
            let opts = opts.resolve_options()?;
            let table = inspect_table(&text, &opts);

            let stdout = io::stdout();
            if align {
                let mut tw = TabWriter::new(stdout.lock()).padding(2);
                tw.write_all(table.as_bytes())?;
                tw.flush()?;
            } else {
                stdout.lock().write_all(table.as_bytes())?;
            }
        }
        Command::Digest { input, opts, key } => {
            let text = input.read()?;
            let opts = opts.resolve_options()?;
            let out = if key {
                hashing::cache_key_v1(&text, &opts)?
            } else {
                hashing::resolution_digest(&resolve_str(&text, &opts))?
            };
            println!("{out}");
        }
    }

    Ok(())
}

/// Header plus one row per scalar. Removed positions show `x` for level and
/// `-` for visual index.
fn inspect_table(text: &str, opts: &ResolveOptions) -> String {
    let scalars: Vec<char> = text.chars().collect();
    let r = resolve(&scalars, opts);

    let mut visual = vec![None; scalars.len()];
    for (v, &i) in r.visual_order.iter().enumerate() {
        visual[i] = Some(v);
    }

    let mut out = String::from("index\tcodePoint\tclass\tlevel\tvisual\n");
    for (i, &c) in scalars.iter().enumerate() {
        let level = if r.is_removed(i) { "x".to_string() } else { r.levels[i].to_string() };
        let visual = visual[i].map_or_else(|| "-".to_string(), |v| v.to_string());
        out.push_str(&format!(
            "{i}\tU+{:04X}\t{}\t{level}\t{visual}\n",
            c as u32,
            class_name(classify(c))
        ));
    }
    out
}
