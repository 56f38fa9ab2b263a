//! Stop-log ingestion.
//!
//! A stop log is an XML document with one `stopinfo` element per completed
//! stop. Only three things in it matter here: the `started`/`ended` time
//! attributes and the one stopping-place attribute the run tracks
//! (`parkingArea`, `busStop`, ...). The scanner below pulls exactly that
//! out of the text, reading start and empty-element tags with their
//! attributes and skipping declarations, comments, end tags and character
//! data. It is not a general XML parser and does not try to be one; stop
//! logs are machine-written.

use std::fs;
use std::path::Path;

use crate::errors::DwellError;
use crate::model::StopRecord;
use crate::time::parse_time;

/// Element carrying one completed stop.
const STOP_ELEMENT: &str = "stopinfo";
const STARTED_ATTR: &str = "started";
const ENDED_ATTR: &str = "ended";

/// Read a whole stop log, tracking the given stopping-place attribute.
///
/// Fatal on unreadable input and on malformed records (broken tag
/// structure, missing or unparseable `started`, unparseable `ended`).
/// Records without the tracked attribute come back with `place: None`.
pub fn read_stop_log(path: &Path, place_attr: &str) -> Result<Vec<StopRecord>, DwellError> {
    let text = fs::read_to_string(path)?;
    parse_stop_log(&text, place_attr)
}

/// Parse stop-log text into records, in document order.
pub fn parse_stop_log(text: &str, place_attr: &str) -> Result<Vec<StopRecord>, DwellError> {
    let mut records = Vec::new();
    let mut scanner = ElementScanner::new(text);
    while let Some(element) = scanner.next_element()? {
        if element.name != STOP_ELEMENT {
            continue;
        }
        let place = element
            .attr(place_attr)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        let started = match element.attr(STARTED_ATTR) {
            Some(v) => time_attr(text, &element, STARTED_ATTR, v)?,
            None => {
                return Err(DwellError::Malformed {
                    line: line_at(text, element.offset),
                    reason: format!("{STOP_ELEMENT} has no '{STARTED_ATTR}' attribute"),
                })
            }
        };
        let ended = match element.attr(ENDED_ATTR) {
            Some(v) => Some(time_attr(text, &element, ENDED_ATTR, v)?),
            None => None,
        };
        records.push(StopRecord {
            place,
            started,
            ended,
        });
    }
    tracing::debug!(records = records.len(), "stop log parsed");
    Ok(records)
}

fn time_attr(text: &str, element: &RawElement<'_>, attr: &str, value: &str) -> Result<f64, DwellError> {
    parse_time(value).map_err(|_| DwellError::Malformed {
        line: line_at(text, element.offset),
        reason: format!("cannot parse {attr} time '{value}'"),
    })
}

/// 1-based line number of a byte offset. Only computed on the error path,
/// so scanning stays a single linear pass.
fn line_at(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// A start or empty-element tag with its attributes.
struct RawElement<'a> {
    name: &'a str,
    attrs: Vec<(&'a str, String)>,
    /// Byte offset of the opening `<`, for error reporting.
    offset: usize,
}

impl RawElement<'_> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Single forward pass over the document text.
struct ElementScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> ElementScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Next start or empty-element tag, or `None` at end of input.
    fn next_element(&mut self) -> Result<Option<RawElement<'a>>, DwellError> {
        let bytes = self.text.as_bytes();
        loop {
            while self.pos < bytes.len() && bytes[self.pos] != b'<' {
                self.pos += 1;
            }
            if self.pos >= bytes.len() {
                return Ok(None);
            }
            let tag_start = self.pos;
            self.pos += 1;
            match bytes.get(self.pos) {
                None => return Err(self.malformed(tag_start, "unterminated tag")),
                Some(b'?') => self.skip_past(tag_start, "?>")?,
                Some(b'!') if self.text[self.pos..].starts_with("!--") => {
                    self.skip_past(tag_start, "-->")?
                }
                Some(b'!') | Some(b'/') => self.skip_past(tag_start, ">")?,
                Some(_) => return self.read_tag(tag_start).map(Some),
            }
        }
    }

    fn read_tag(&mut self, tag_start: usize) -> Result<RawElement<'a>, DwellError> {
        let bytes = self.text.as_bytes();
        let name_start = self.pos;
        while self.pos < bytes.len() && !is_name_end(bytes[self.pos]) {
            self.pos += 1;
        }
        let name = &self.text[name_start..self.pos];
        let mut attrs = Vec::new();
        loop {
            self.skip_whitespace();
            match bytes.get(self.pos) {
                None => return Err(self.malformed(tag_start, "unterminated tag")),
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') => {
                    if bytes.get(self.pos + 1) != Some(&b'>') {
                        return Err(self.malformed(tag_start, "stray '/' in tag"));
                    }
                    self.pos += 2;
                    break;
                }
                Some(_) => attrs.push(self.read_attr(tag_start)?),
            }
        }
        Ok(RawElement {
            name,
            attrs,
            offset: tag_start,
        })
    }

    fn read_attr(&mut self, tag_start: usize) -> Result<(&'a str, String), DwellError> {
        let bytes = self.text.as_bytes();
        let name_start = self.pos;
        while self.pos < bytes.len() && !is_name_end(bytes[self.pos]) && bytes[self.pos] != b'=' {
            self.pos += 1;
        }
        let name = &self.text[name_start..self.pos];
        self.skip_whitespace();
        if bytes.get(self.pos) != Some(&b'=') {
            return Err(self.malformed(tag_start, &format!("attribute '{name}' has no value")));
        }
        self.pos += 1;
        self.skip_whitespace();
        let quote = match bytes.get(self.pos) {
            Some(&q) if q == b'"' || q == b'\'' => q,
            _ => {
                return Err(self.malformed(tag_start, &format!("attribute '{name}' is not quoted")))
            }
        };
        self.pos += 1;
        let value_start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos] != quote {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return Err(self.malformed(
                tag_start,
                &format!("attribute '{name}' has an unterminated value"),
            ));
        }
        let value = unescape(&self.text[value_start..self.pos]);
        self.pos += 1;
        Ok((name, value))
    }

    fn skip_past(&mut self, tag_start: usize, needle: &str) -> Result<(), DwellError> {
        match self.text[self.pos..].find(needle) {
            Some(i) => {
                self.pos += i + needle.len();
                Ok(())
            }
            None => Err(self.malformed(tag_start, "unterminated tag")),
        }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn malformed(&self, offset: usize, reason: &str) -> DwellError {
        DwellError::Malformed {
            line: line_at(self.text, offset),
            reason: reason.to_string(),
        }
    }
}

fn is_name_end(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'>' || b == b'/'
}

/// Resolve the five predefined entities; anything else passes through.
fn unescape(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let resolved = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&apos;", '\''),
        ]
        .iter()
        .find(|(entity, _)| rest.starts_with(entity));
        match resolved {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
