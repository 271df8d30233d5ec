//! Serialized entry format.
//!
//! Every record is stored as one frame: a little-endian `u32` length followed
//! by a UTF-8 line of the form `<id>,<title>,<artist>\n`. Backslash, comma,
//! newline and carriage return inside title and artist are escaped so a frame
//! always splits back into exactly three fields.

use core::fmt;
use std::io::{Read, Write};

use crate::error::Result;
use crate::inventory::CdRecord;

const LEN_PREFIX: usize = 4;

#[derive(Debug, PartialEq, Eq)]
pub enum CodecErr {
    FieldCount(usize),
    InvalidId(String),
    BadEscape(Option<char>),
    Utf8,
    Oversized(usize),
}

impl fmt::Display for CodecErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 3 fields, found {}", n),
            Self::InvalidId(id) => write!(f, "id \"{}\" is not an integer", id),
            Self::BadEscape(Some(c)) => write!(f, "unknown escape sequence \"\\{}\"", c),
            Self::BadEscape(None) => write!(f, "dangling escape at end of entry"),
            Self::Utf8 => write!(f, "entry is not valid UTF-8"),
            Self::Oversized(n) => write!(f, "entry of {} bytes does not fit a frame", n),
        }
    }
}

impl std::error::Error for CodecErr {}

/// What a single read from the entry stream produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Frame {
    Entry(CdRecord),
    /// Clean end of stream on a frame boundary.
    End,
    /// The stream ended part way through a frame.
    Truncated,
}

fn escape_into(out: &mut String, field: &str) {
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
}

pub fn encode_line(record: &CdRecord) -> String {
    let mut line = record.id.to_string();
    line.push(',');
    escape_into(&mut line, &record.title);
    line.push(',');
    escape_into(&mut line, &record.artist);
    line.push('\n');
    line
}

pub fn decode_line(line: &str) -> core::result::Result<CdRecord, CodecErr> {
    let line = line.strip_suffix('\n').unwrap_or(line);

    let mut fields = Vec::with_capacity(3);
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let unescaped = match chars.next() {
                    Some('\\') => '\\',
                    Some(',') => ',',
                    Some('n') => '\n',
                    Some('r') => '\r',
                    other => return Err(CodecErr::BadEscape(other)),
                };
                current.push(unescaped);
            }
            ',' => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);

    let [id_text, title, artist]: [String; 3] = fields
        .try_into()
        .map_err(|fields: Vec<String>| CodecErr::FieldCount(fields.len()))?;
    let id = id_text.trim().parse::<i64>().map_err(|_| CodecErr::InvalidId(id_text.clone()))?;

    Ok(CdRecord { id, title, artist })
}

pub fn write_entry<W: Write>(writer: &mut W, record: &CdRecord) -> Result<()> {
    let line = encode_line(record);
    let len = u32::try_from(line.len()).map_err(|_| CodecErr::Oversized(line.len()))?;
    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(line.as_bytes())?;
    Ok(())
}

pub fn read_entry<R: Read>(reader: &mut R) -> Result<Frame> {
    let mut len_buf = [0u8; LEN_PREFIX];
    let mut filled = 0;
    while filled < LEN_PREFIX {
        match reader.read(&mut len_buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    match filled {
        0 => return Ok(Frame::End),
        LEN_PREFIX => {}
        _ => return Ok(Frame::Truncated),
    }

    let len = u32::from_le_bytes(len_buf) as usize;
    let mut payload = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut payload)?;
    if payload.len() < len {
        return Ok(Frame::Truncated);
    }

    let line = String::from_utf8(payload).map_err(|_| CodecErr::Utf8)?;
    Ok(Frame::Entry(decode_line(&line)?))
}
