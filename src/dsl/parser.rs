//! Parser for the wiring description language.

use super::ast::{ModuleDef, ModuleKind, WiringAst};
use crate::circuit::BROADCASTER;
use crate::error::{PulserError, Result};

/// Parse a full wiring description.
///
/// Blank lines and lines starting with `#` are skipped. Any other
/// malformed line is an error; lines are never silently dropped.
pub fn parse(input: &str) -> Result<WiringAst> {
    let mut ast = WiringAst::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        ast.modules.push(parse_module(line, idx + 1)?);
    }

    Ok(ast)
}

/// Parse a single wiring line of the form `<decl> -> <dest>, <dest>, ...`.
fn parse_module(line: &str, lineno: usize) -> Result<ModuleDef> {
    let (decl, dests) = line
        .split_once("->")
        .ok_or_else(|| PulserError::parse(lineno, "missing '->' separator"))?;

    let decl = decl.trim();
    let (kind, name) = parse_declaration(decl, lineno)?;

    let destinations = dests
        .split(',')
        .map(|d| {
            let d = d.trim();
            if d.is_empty() {
                Err(PulserError::parse(lineno, "empty destination name"))
            } else if !is_identifier(d) {
                Err(PulserError::parse(
                    lineno,
                    format!("invalid destination name '{d}'"),
                ))
            } else {
                Ok(d.to_string())
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ModuleDef {
        name,
        kind,
        destinations,
        line: lineno,
    })
}

/// Classify a module declaration by its prefix.
fn parse_declaration(decl: &str, lineno: usize) -> Result<(ModuleKind, String)> {
    if decl == BROADCASTER {
        return Ok((ModuleKind::Broadcaster, decl.to_string()));
    }

    let (kind, name) = if let Some(name) = decl.strip_prefix('%') {
        (ModuleKind::FlipFlop, name)
    } else if let Some(name) = decl.strip_prefix('&') {
        (ModuleKind::Conjunction, name)
    } else {
        return Err(PulserError::parse(
            lineno,
            format!("unknown module declaration '{decl}' (expected 'broadcaster', '%name' or '&name')"),
        ));
    };

    if name.is_empty() {
        return Err(PulserError::parse(lineno, "empty module name"));
    }
    if !is_identifier(name) {
        return Err(PulserError::parse(
            lineno,
            format!("invalid module name '{name}'"),
        ));
    }

    Ok((kind, name.to_string()))
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_broadcaster_line() {
        let def = parse_module("broadcaster -> a, b, c", 1).unwrap();
        assert_eq!(def.kind, ModuleKind::Broadcaster);
        assert_eq!(def.name, "broadcaster");
        assert_eq!(def.destinations, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_flipflop_line() {
        let def = parse_module("%a -> b", 2).unwrap();
        assert_eq!(def.kind, ModuleKind::FlipFlop);
        assert_eq!(def.name, "a");
        assert_eq!(def.destinations, vec!["b"]);
        assert_eq!(def.line, 2);
    }

    #[test]
    fn test_parse_conjunction_line() {
        let def = parse_module("&inv -> a", 5).unwrap();
        assert_eq!(def.kind, ModuleKind::Conjunction);
        assert_eq!(def.name, "inv");
    }

    #[test]
    fn test_parse_tight_destination_list() {
        let def = parse_module("%a -> b,c,  d", 1).unwrap();
        assert_eq!(def.destinations, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_missing_arrow_is_an_error() {
        let err = parse_module("%a b, c", 3).unwrap_err();
        assert!(matches!(err, PulserError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_unknown_prefix_is_an_error() {
        assert!(parse_module("@a -> b", 1).is_err());
        assert!(parse_module("a -> b", 1).is_err());
    }

    #[test]
    fn test_empty_name_is_an_error() {
        assert!(parse_module("% -> b", 1).is_err());
        assert!(parse_module("%a -> b,,c", 1).is_err());
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let input = "# example network\n\nbroadcaster -> a\n%a -> b\n";
        let ast = parse(input).unwrap();
        assert_eq!(ast.modules.len(), 2);
        assert_eq!(ast.modules[1].line, 4);
    }
}
