//! Range tokenizer: turns the annotated AST into positioned tokens.
//!
//! Spans come from the compiler snapshot while positions are read against the
//! virtual file text, so a slightly stale AST can point at text that no
//! longer holds the name. Such occurrences are dropped rather than guessed.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::artifacts::{AstNode, Identifier, IdentifierDetails, ModuleName, NameMap, Span};
use crate::text::{LineTable, convert_byte_to_utf16_in_line, convert_char_to_byte_in_line};

use super::kind::{TokenKind, TokenModifiers, classify_name};

/// A classified, single-line span of the document.
///
/// Columns and length are in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangedSemanticToken {
    pub line: u32,
    pub start: u32,
    pub length: u32,
    pub kind: TokenKind,
    pub modifiers: TokenModifiers,
    /// Defining module of the name, if it comes from another module.
    pub module: Option<ModuleName>,
}

impl RangedSemanticToken {
    pub fn end(&self) -> u32 {
        self.start + self.length
    }
}

/// Locate `occ` inside the text covered by `span`.
///
/// The span may cover more than the bare name: `(+)`, `` `elem` `` and
/// qualified names like `Map.insert` are trimmed so that the token covers
/// only the name itself. Returns `(line, utf16_start, utf16_length)`.
fn locate_occurrence(table: &LineTable<'_>, span: Span, occ: &str) -> Option<(u32, u32, u32)> {
    if occ.is_empty() || !span.is_single_line() || span.start.col >= span.end.col {
        return None;
    }
    let line_text = table.line(span.start.line as usize)?;
    let start_byte = convert_char_to_byte_in_line(line_text, span.start.col as usize)?;
    let end_byte = convert_char_to_byte_in_line(line_text, span.end.col as usize)?;
    let covered = &line_text[start_byte..end_byte];

    // `()` and `(,)` are names in their own right, so fall back to the raw text
    let (wrapper_offset, qualifier) = [strip_wrapper(covered), (0, covered)]
        .into_iter()
        .find_map(|(offset, inner)| inner.strip_suffix(occ).map(|qualifier| (offset, qualifier)))?;
    if !qualifier.is_empty() && !is_module_qualifier(qualifier) {
        return None;
    }

    let name_start = start_byte + wrapper_offset + qualifier.len();
    let name_end = name_start + occ.len();
    let start = convert_byte_to_utf16_in_line(line_text, name_start)?;
    let end = convert_byte_to_utf16_in_line(line_text, name_end)?;
    Some((span.start.line, start as u32, (end - start) as u32))
}

/// Strip one layer of `( )` or backticks, returning the byte offset of the
/// remaining text.
fn strip_wrapper(text: &str) -> (usize, &str) {
    let inner = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .or_else(|| text.strip_prefix('`').and_then(|t| t.strip_suffix('`')));
    match inner {
        Some(inner) => {
            let trimmed = inner.trim();
            let leading = inner.len() - inner.trim_start().len();
            (1 + leading, trimmed)
        }
        None => (0, text),
    }
}

/// `Data.Map.` style prefixes: dot-terminated, capitalised segments.
fn is_module_qualifier(prefix: &str) -> bool {
    let Some(body) = prefix.strip_suffix('.') else {
        return false;
    };
    body.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars.next().is_some_and(char::is_uppercase)
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '\'')
    })
}

fn merged_details(occurrences: &[(Span, IdentifierDetails)]) -> IdentifierDetails {
    let mut merged = IdentifierDetails::new();
    for (_, details) in occurrences {
        merged.merge(details);
    }
    merged
}

/// Compute the sorted, non-overlapping token list for one file.
///
/// * `ast` - the file's subtree of the annotated AST
/// * `names` - name-to-definition map for names not bound in the file
/// * `text` - the virtual file contents the positions are checked against
///
/// Identical inputs always produce an identical list.
pub fn collect_ranged_tokens(
    ast: &AstNode,
    names: &NameMap,
    text: &str,
) -> Vec<RangedSemanticToken> {
    let table = LineTable::new(text);
    let refs = ast.ref_map();
    let mut tokens = Vec::new();

    for (identifier, occurrences) in &refs {
        let (occ, kind, module) = match identifier {
            Identifier::Module(module) => (module.as_str(), TokenKind::Module, None),
            Identifier::Name(name) => {
                let merged = merged_details(occurrences);
                let kind = classify_name(Some(&merged), names.lookup(name), name.is_symbolic());
                (name.occ.as_str(), kind, name.module.clone())
            }
        };

        for (span, details) in occurrences {
            let Some((line, start, length)) = locate_occurrence(&table, *span, occ) else {
                log::trace!(
                    target: "hieroglyph::semantic",
                    "Dropping occurrence of {:?} at {:?}: text does not match",
                    occ,
                    span
                );
                continue;
            };
            let modifiers = if details.is_binding() {
                TokenModifiers::DECLARATION
            } else {
                TokenModifiers::NONE
            };
            tokens.push(RangedSemanticToken {
                line,
                start,
                length,
                kind,
                modifiers,
                module: module.clone(),
            });
        }
    }

    normalize_tokens(tokens)
}

/// Sort by position, merge tokens sharing a range and drop overlaps.
fn normalize_tokens(tokens: Vec<RangedSemanticToken>) -> Vec<RangedSemanticToken> {
    let mut by_range: BTreeMap<(u32, u32, Reverse<u32>), RangedSemanticToken> = BTreeMap::new();
    for token in tokens {
        let key = (token.line, token.start, Reverse(token.length));
        match by_range.get_mut(&key) {
            Some(existing) => {
                if token.kind > existing.kind {
                    existing.kind = token.kind;
                    existing.module = token.module;
                }
                existing.modifiers = existing.modifiers.union(token.modifiers);
            }
            None => {
                by_range.insert(key, token);
            }
        }
    }

    let mut result: Vec<RangedSemanticToken> = Vec::with_capacity(by_range.len());
    for token in by_range.into_values() {
        if let Some(last) = result.last()
            && last.line == token.line
            && token.start < last.end()
        {
            continue;
        }
        result.push(token);
    }
    result
}
