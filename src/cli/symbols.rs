use anyhow::Result;
use clap::Args;

use shaderlab::{Config, Namespace, Symbol};

#[derive(Args)]
pub struct SymbolsArgs {
    /// Only list one namespace (function, type, builtin, uniform, keyword, snippet)
    #[arg(short, long, value_parser = parse_namespace)]
    pub namespace: Option<Namespace>,
    /// Print descriptors as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_namespace(s: &str) -> Result<Namespace, String> {
    Namespace::parse(s).ok_or_else(|| {
        let known: Vec<&str> = Namespace::ALL.iter().map(|ns| ns.as_str()).collect();
        format!("unknown namespace '{}' (expected one of: {})", s, known.join(", "))
    })
}

pub fn cmd_symbols(config: &Config, args: SymbolsArgs) -> Result<()> {
    let registry = config.registry();
    let symbols: Vec<Symbol<'_>> = match args.namespace {
        Some(ns) => registry.namespace(ns),
        None => registry.symbols(),
    };
    log::debug!("{} symbols", symbols.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&symbols)?);
        return Ok(());
    }
    for symbol in &symbols {
        println!("{:<8}  {}", symbol.namespace(), symbol.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespace() {
        assert_eq!(parse_namespace("builtin"), Ok(Namespace::BuiltinVariable));
        let err = parse_namespace("macro").unwrap_err();
        assert!(err.contains("function, type, builtin, uniform, keyword, snippet"));
    }
}
