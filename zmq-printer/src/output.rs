use crate::endpoint::Endpoint;
use crate::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Frame bytes unchanged, one frame per line
    Raw,
    /// Frame decoded as UTF-8, invalid sequences replaced
    Text,
    /// Escaped byte-string literal, e.g. b'hello'
    Bytes,
    /// One JSON object per frame with base64 data
    Json,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct FrameRecord {
    pub seq: u64,
    pub size: usize,
    pub data: String,
}

impl FrameRecord {
    pub fn new(seq: u64, frame: &[u8]) -> FrameRecord {
        FrameRecord {
            seq,
            size: frame.len(),
            data: STANDARD.encode(frame),
        }
    }
}

pub struct FramePrinter<W: Write> {
    out: W,
    format: OutputFormat,
    printed: u64,
}

impl<W: Write> FramePrinter<W> {
    pub fn new(out: W, format: OutputFormat) -> FramePrinter<W> {
        FramePrinter {
            out,
            format,
            printed: 0,
        }
    }

    pub fn announce(&mut self, endpoint: &Endpoint) -> Result<()> {
        writeln!(self.out, "Listening on {}...", endpoint)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn print_frame(&mut self, frame: &[u8]) -> Result<()> {
        match self.format {
            OutputFormat::Raw => {
                self.out.write_all(frame)?;
                self.out.write_all(b"\n")?;
            }
            OutputFormat::Text => {
                writeln!(self.out, "{}", String::from_utf8_lossy(frame))?;
            }
            OutputFormat::Bytes => {
                writeln!(self.out, "{}", bytes_literal(frame))?;
            }
            OutputFormat::Json => {
                let record = FrameRecord::new(self.printed, frame);
                serde_json::to_writer(&mut self.out, &record)?;
                self.out.write_all(b"\n")?;
            }
        }
        self.out.flush()?;
        self.printed += 1;
        Ok(())
    }

    pub fn printed(&self) -> u64 {
        self.printed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders `frame` as a `b'...'` literal. Double quotes are used only when
/// the frame has a single quote and no double quote.
pub fn bytes_literal(frame: &[u8]) -> String {
    let quote = if frame.contains(&b'\'') && !frame.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };
    let mut rendered = String::with_capacity(frame.len() + 3);
    rendered.push('b');
    rendered.push(quote as char);
    for &byte in frame {
        match byte {
            b'\\' => rendered.push_str("\\\\"),
            b'\t' => rendered.push_str("\\t"),
            b'\n' => rendered.push_str("\\n"),
            b'\r' => rendered.push_str("\\r"),
            b if b == quote => {
                rendered.push('\\');
                rendered.push(b as char);
            }
            0x20..=0x7e => rendered.push(byte as char),
            _ => rendered.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    rendered.push(quote as char);
    rendered
}
