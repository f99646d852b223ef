use crate::{
    error::{Error, Result},
    types::DataType,
};

/// Deepest `<` nesting accepted before the input is rejected
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser for textual type signatures such as `List<Data>`, `Map<String, Int>` or
/// `ClassName<Type?>?`.
///
/// A single cursor walks the input. Each `<` recurses to collect the argument list that
/// follows it, and the recursion reports where it stopped so the caller can resume from
/// there. Siblings separated by `,` are collected in the same frame. Names are sliced
/// out of the input, never copied per character.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataTypeParser;

impl DataTypeParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a type signature. When the input holds several top-level types
    /// (`A, B`) the first one is returned.
    pub fn parse(&self, signature: &str) -> Result<DataType> {
        let scan = Scanner::new(signature).scan_siblings(0, 0)?;
        let token = scan
            .tokens
            .into_iter()
            .next()
            .ok_or_else(|| Error::ParseError(signature.to_string()))?;
        token.into_data_type(signature)
    }
}

/// Intermediate tree: a raw name (possibly still carrying a trailing `?`) and the
/// tokens found between its angle brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token<'a> {
    name: &'a str,
    nullable_suffix: bool,
    children: Vec<Token<'a>>,
}

impl<'a> Token<'a> {
    fn new(name: &'a str, children: Vec<Token<'a>>) -> Self {
        Self {
            name,
            nullable_suffix: false,
            children,
        }
    }

    fn into_data_type(self, signature: &str) -> Result<DataType> {
        let (name, is_nullable) = match self.name.strip_suffix('?') {
            Some(stripped) => (stripped.trim_end(), true),
            None => (self.name, false),
        };
        let is_nullable = is_nullable || self.nullable_suffix;

        // At most one `?`, and only at the very end
        if name.is_empty() || name.contains('?') {
            return Err(Error::ParseError(signature.to_string()));
        }

        if self.children.is_empty() {
            Ok(DataType::specific(name, is_nullable))
        } else {
            let type_arguments = self
                .children
                .into_iter()
                .map(|child| child.into_data_type(signature))
                .collect::<Result<Vec<_>>>()?;
            Ok(DataType::generic(name, is_nullable, type_arguments))
        }
    }
}

struct Scan<'a> {
    tokens: Vec<Token<'a>>,
    /// Byte offset just past the closing `>` (or the end of input)
    end: usize,
}

struct Scanner<'a> {
    source: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Collect sibling tokens from `start` until the `>` closing the current
    /// argument list or the end of input. `depth` counts the enclosing `<`.
    fn scan_siblings(&self, start: usize, depth: usize) -> Result<Scan<'a>> {
        if depth > MAX_NESTING_DEPTH {
            return Err(Error::ParseError(self.source.to_string()));
        }

        // Structural characters are ASCII, so byte offsets always land on char boundaries.
        let bytes = self.source.as_bytes();
        let mut tokens = Vec::new();
        let mut position = start;
        let mut token_start = start;

        while position < bytes.len() {
            match bytes[position] {
                b'<' => {
                    let children = self.scan_siblings(position + 1, depth + 1)?;
                    let name = self.name_between(token_start, position);
                    if !name.is_empty() {
                        tokens.push(Token::new(name, children.tokens));
                    }
                    position = children.end;
                    token_start = position;
                }
                b',' => {
                    self.push_or_merge(&mut tokens, self.name_between(token_start, position))?;
                    position += 1;
                    token_start = position;
                }
                b'>' => {
                    self.push_or_merge(&mut tokens, self.name_between(token_start, position))?;
                    return Ok(Scan {
                        tokens,
                        end: position + 1,
                    });
                }
                _ => position += 1,
            }
        }

        self.push_or_merge(&mut tokens, self.name_between(token_start, position))?;
        Ok(Scan {
            tokens,
            end: position,
        })
    }

    fn name_between(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or_default().trim()
    }

    /// A lone `?` marks the token right before it as nullable instead of
    /// becoming a token of its own.
    fn push_or_merge(&self, tokens: &mut Vec<Token<'a>>, name: &'a str) -> Result<()> {
        match name {
            "" => Ok(()),
            "?" => match tokens.last_mut() {
                Some(previous) if !previous.nullable_suffix => {
                    previous.nullable_suffix = true;
                    Ok(())
                }
                _ => Err(Error::ParseError(self.source.to_string())),
            },
            _ if name.starts_with('?') => Err(Error::ParseError(self.source.to_string())),
            _ => {
                tokens.push(Token::new(name, Vec::new()));
                Ok(())
            }
        }
    }
}
