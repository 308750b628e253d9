//! Parsing of individual PPUCD lines.
//!
//! A record line is `;`-separated:
//!
//! ```text
//! block;0000..007F;age=1.1;blk=ASCII;gc=Cc;-XIDS
//! cp;0041;gc=Lu;XIDC;XIDS
//! ```
//!
//! The first field is the record kind, the second the codepoint or
//! `START..END` range in hex, and the remaining fields are property tokens.

use ahash::AHashMap;
use uniclass_common::{Error, Result};
use uniclass_ranges::CodepointRange;

/// The kinds of PPUCD lines that carry property assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `cp`: a single codepoint or an explicit range.
    Codepoint,
    /// `block`: block-wide defaults, refined by nested `cp` records.
    Block,
}

impl RecordKind {
    pub fn from_tag(tag: &str) -> Option<RecordKind> {
        match tag {
            "cp" => Some(RecordKind::Codepoint),
            "block" => Some(RecordKind::Block),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            RecordKind::Codepoint => "cp",
            RecordKind::Block => "block",
        }
    }
}

/// Value of a property token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// `X` (true) or `-X` (false).
    Bool(bool),
    /// `X=value`.
    Str(String),
}

/// One `cp` or `block` line.
///
/// Properties not mentioned on the line are absent from [`properties`](Self::properties);
/// absence means "unchanged", not "false".
#[derive(Debug, Clone)]
pub struct Record {
    pub line: usize,
    pub kind: RecordKind,
    pub range: CodepointRange,
    pub properties: AHashMap<String, PropertyValue>,
}

impl Record {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines, `#` comments, and record kinds other
    /// than `cp` and `block`. `line` is the 1-based line number used in error
    /// messages.
    pub fn parse(text: &str, line: usize) -> Result<Option<Record>> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        let mut fields = text.split(';');
        let tag = fields.next().unwrap_or_default();
        let Some(kind) = RecordKind::from_tag(tag) else {
            return Ok(None);
        };

        let range_field = fields
            .next()
            .ok_or_else(|| Error::invalid_record(line, format!("'{tag}' record has no range")))?;
        let range = parse_range(range_field).map_err(|e| e.at_line(line))?;

        let mut properties = AHashMap::new();
        for token in fields {
            parse_property(token, &mut properties).map_err(|e| e.at_line(line))?;
        }

        Ok(Some(Record {
            line,
            kind,
            range,
            properties,
        }))
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Returns the value of a boolean property, `None` if absent or if the
    /// property carries a string value.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(PropertyValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value of a string property, `None` if absent or boolean.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(PropertyValue::Str(value)) => Some(value),
            _ => None,
        }
    }
}

/// Parses a single hex codepoint (`00B5`) or a range (`1000..10FF`).
///
/// Errors are returned without a line number (line 0); callers attach it.
pub fn parse_range(s: &str) -> Result<CodepointRange> {
    let s = s.trim();
    match s.split_once("..") {
        Some((start, end)) => CodepointRange::new(parse_hex(start)?, parse_hex(end)?),
        None => Ok(CodepointRange::single(parse_hex(s)?)),
    }
}

fn parse_hex(s: &str) -> Result<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_record(0, format!("invalid codepoint '{s}'")));
    }
    u32::from_str_radix(s, 16)
        .map_err(|_| Error::invalid_record(0, format!("codepoint '{s}' is out of range")))
}

fn parse_property(token: &str, properties: &mut AHashMap<String, PropertyValue>) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(());
    }

    match token.rsplit_once('=') {
        None => {
            let (name, value) = match token.strip_prefix('-') {
                Some(name) => (name, false),
                None => (token, true),
            };
            if name.is_empty() {
                return Err(Error::invalid_record(0, "empty property name"));
            }
            properties.insert(name.to_string(), PropertyValue::Bool(value));
        }
        Some((names, value)) => {
            for name in names.split('=') {
                if name.is_empty() {
                    return Err(Error::invalid_record(
                        0,
                        format!("empty property name in '{token}'"),
                    ));
                }
                properties.insert(name.to_string(), PropertyValue::Str(value.to_string()));
            }
        }
    }
    Ok(())
}
