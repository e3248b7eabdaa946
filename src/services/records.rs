use anyhow::{Result, bail};
use std::iter::Peekable;
use std::str::Chars;

/// One delimited record and the line it starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Reads delimited records with CSV quoting rules.
///
/// A field starting with `"` runs to the matching closing quote and may hold
/// delimiters and newlines; `""` inside it is a literal quote. A quote inside
/// an unquoted field, or text after a closing quote, is an error. Empty lines
/// are skipped and `\r\n` counts as a line end.
pub struct RecordReader<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
    line: usize,
}

enum FieldEnd {
    Delimiter,
    Record,
}

impl<'a> RecordReader<'a> {
    pub fn new(contents: &'a str, delimiter: char) -> Self {
        Self {
            chars: contents.chars().peekable(),
            delimiter,
            line: 1,
        }
    }

    /// Next record, `None` at end of input. Errors carry the line number.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        self.skip_empty_lines();
        if self.chars.peek().is_none() {
            return Ok(None);
        }

        let line = self.line;
        let mut fields = Vec::new();

        loop {
            let (field, end) = if self.chars.peek() == Some(&'"') {
                self.read_quoted(line)?
            } else {
                self.read_bare()?
            };
            fields.push(field);

            if let FieldEnd::Record = end {
                break;
            }
        }

        Ok(Some(Record { line, fields }))
    }

    fn skip_empty_lines(&mut self) {
        loop {
            match self.chars.peek() {
                Some('\n') => {
                    self.chars.next();
                    self.line += 1;
                }
                Some('\r') => {
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    if ahead.peek() != Some(&'\n') {
                        return;
                    }
                    self.chars.next();
                }
                _ => return,
            }
        }
    }

    fn read_bare(&mut self) -> Result<(String, FieldEnd)> {
        let mut field = String::new();

        while let Some(c) = self.chars.next() {
            if c == self.delimiter {
                return Ok((field, FieldEnd::Delimiter));
            }
            match c {
                '\n' => {
                    self.line += 1;
                    if field.ends_with('\r') {
                        field.pop();
                    }
                    return Ok((field, FieldEnd::Record));
                }
                '"' => bail!("bare \" in non-quoted field on line {}", self.line),
                _ => field.push(c),
            }
        }

        Ok((field, FieldEnd::Record))
    }

    fn read_quoted(&mut self, record_line: usize) -> Result<(String, FieldEnd)> {
        let mut field = String::new();
        self.chars.next();

        loop {
            match self.chars.next() {
                None => bail!("unterminated quoted field starting on line {}", record_line),
                Some('"') if self.chars.peek() == Some(&'"') => {
                    self.chars.next();
                    field.push('"');
                }
                Some('"') => break,
                Some('\n') => {
                    self.line += 1;
                    field.push('\n');
                }
                Some(c) => field.push(c),
            }
        }

        self.after_closing_quote().map(|end| (field, end))
    }

    fn after_closing_quote(&mut self) -> Result<FieldEnd> {
        match self.chars.next() {
            None => Ok(FieldEnd::Record),
            Some(c) if c == self.delimiter => Ok(FieldEnd::Delimiter),
            Some('\n') => {
                self.line += 1;
                Ok(FieldEnd::Record)
            }
            Some('\r') if self.chars.peek() == Some(&'\n') => {
                self.chars.next();
                self.line += 1;
                Ok(FieldEnd::Record)
            }
            Some(_) => bail!("extraneous or missing \" in quoted field on line {}", self.line),
        }
    }
}
