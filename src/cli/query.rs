use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tower_lsp::lsp_types::Range;

use shaderlab::glsl::Signature;
use shaderlab::lsp::Intelligence;
use shaderlab::{Candidate, Config};

use super::{read_document, to_position};

#[derive(Args)]
pub struct PositionArgs {
    /// GLSL source file
    pub file: PathBuf,
    /// Line number (1-based)
    pub line: u32,
    /// Column (1-based)
    pub col: u32,
}

#[derive(Args)]
pub struct CompleteArgs {
    #[command(flatten)]
    pub at: PositionArgs,
    /// Print candidates and replacement range as JSON
    #[arg(long)]
    pub json: bool,
    /// Only list candidates containing the word before the cursor
    #[arg(long)]
    pub prefix: bool,
}

pub fn cmd_hover(config: &Config, args: PositionArgs) -> Result<()> {
    let doc = read_document(&args.file)?;
    let pos = to_position(args.line, args.col)?;
    let intel = Intelligence::from_config(config);
    match intel.hover.hover(&doc, pos) {
        Some(info) => println!("{}", info.markdown),
        None => log::info!("no hover at {}:{}", args.line, args.col),
    }
    Ok(())
}

#[derive(Serialize)]
struct CompletionOutput<'a> {
    prefix: &'a str,
    range: Range,
    items: Vec<&'a Candidate>,
}

pub fn cmd_complete(config: &Config, args: CompleteArgs) -> Result<()> {
    let doc = read_document(&args.at.file)?;
    let pos = to_position(args.at.line, args.at.col)?;
    let intel = Intelligence::from_config(config);
    let completions = intel.completion.complete(&doc, pos);
    let items: Vec<&Candidate> = if args.prefix {
        completions.matching_prefix().collect()
    } else {
        completions.items.iter().collect()
    };

    if args.json {
        let output = CompletionOutput {
            prefix: &completions.prefix,
            range: completions.range,
            items,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if items.is_empty() {
        log::info!("no candidates match '{}'", completions.prefix);
    }
    let width = items.iter().map(|c| c.label.len()).max().unwrap_or(0);
    for c in items {
        println!("{:<width$}  {:<8}  {}", c.label, kind_label(c), c.detail);
    }
    Ok(())
}

fn kind_label(c: &Candidate) -> &'static str {
    c.kind.namespace().as_str()
}

pub fn cmd_signature(config: &Config, args: PositionArgs) -> Result<()> {
    let doc = read_document(&args.file)?;
    let pos = to_position(args.line, args.col)?;
    let intel = Intelligence::from_config(config);
    let Some(active) = intel.signature.signature_help(&doc, pos) else {
        log::info!("no enclosing call at {}:{}", args.line, args.col);
        return Ok(());
    };
    for (i, sig) in active.function.signatures.iter().enumerate() {
        if i == active.active_signature {
            println!("> {}", mark_parameter(sig, active.active_parameter));
        } else {
            println!("  {}", sig.label);
        }
    }
    Ok(())
}

/// Signature label with the active parameter wrapped in brackets.
fn mark_parameter(sig: &Signature, active: u32) -> String {
    let Some(open) = sig.label.find('(') else {
        return sig.label.clone();
    };
    let params: Vec<String> = sig
        .parameters
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == active as usize {
                format!("[{}]", p.label)
            } else {
                p.label.clone()
            }
        })
        .collect();
    format!("{}{})", &sig.label[..=open], params.join(", "))
}
