//! File-backed move journal: line-delimited JSON with a SHA-256 hash chain.
//!
//! Line 1 is the header (`format_version`, `build_id`, `content_hash`,
//! `seed`); every later line is one accepted move, chained to its
//! predecessor through `prev_sha256_hex`/`sha256_hex`. Appends flush line
//! by line, so a session that dies mid-run still leaves a loadable file.
//! Loading verifies every link and stops at the first bad line.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::journal::{InputJournal, InputPayload, InputRecord, JOURNAL_FORMAT_VERSION};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct FileHeader {
    format_version: u16,
    build_id: String,
    content_hash: u64,
    seed: u64,
}

/// The fields a record's hash commits to, serialized as canonical JSON.
#[derive(Serialize)]
struct RecordBody<'a> {
    seq: u64,
    tick: u64,
    payload: &'a InputPayload,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct FileRecord {
    seq: u64,
    tick: u64,
    payload: InputPayload,
    prev_sha256_hex: String,
    sha256_hex: String,
}

/// The previous-hash value for the first record of a chain.
const INITIAL_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// `hex(SHA-256(body_json || prev_sha256_hex))`.
fn record_digest(body_json: &str, prev_sha256_hex: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body_json.as_bytes());
    hasher.update(prev_sha256_hex.as_bytes());
    hasher.finalize().iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Appends accepted moves to a journal file, maintaining the hash chain.
pub struct JournalWriter {
    writer: BufWriter<File>,
    last_sha256_hex: String,
    next_seq: u64,
}

impl JournalWriter {
    /// Start a fresh file for `journal`, writing the header immediately.
    pub fn create(path: &Path, journal: &InputJournal) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let header = FileHeader {
            format_version: journal.format_version,
            build_id: journal.build_id.clone(),
            content_hash: journal.content_hash,
            seed: journal.seed,
        };
        let header_json = serde_json::to_string(&header).map_err(io::Error::other)?;
        writeln!(writer, "{header_json}")?;
        writer.flush()?;

        Ok(Self { writer, last_sha256_hex: INITIAL_HASH.to_string(), next_seq: 0 })
    }

    /// Continue appending to a file that was just loaded.
    pub fn resume(path: &Path, loaded: &LoadedJournal) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            last_sha256_hex: loaded.last_sha256_hex.clone(),
            next_seq: loaded.next_seq,
        })
    }

    /// Append one accepted move, flush it, and return its sequence number.
    pub fn append(&mut self, tick: u64, payload: &InputPayload) -> io::Result<u64> {
        let seq = self.next_seq;
        let body = RecordBody { seq, tick, payload };
        let body_json = serde_json::to_string(&body).map_err(io::Error::other)?;
        let sha256_hex = record_digest(&body_json, &self.last_sha256_hex);

        let record = FileRecord {
            seq,
            tick,
            payload: payload.clone(),
            prev_sha256_hex: self.last_sha256_hex.clone(),
            sha256_hex: sha256_hex.clone(),
        };
        let record_json = serde_json::to_string(&record).map_err(io::Error::other)?;
        writeln!(self.writer, "{record_json}")?;
        self.writer.flush()?;

        self.last_sha256_hex = sha256_hex;
        self.next_seq += 1;
        Ok(seq)
    }
}

/// A verified journal plus what `JournalWriter::resume` needs.
#[derive(Debug)]
pub struct LoadedJournal {
    pub journal: InputJournal,
    pub last_sha256_hex: String,
    pub next_seq: u64,
}

#[derive(Debug)]
pub enum JournalLoadError {
    Io(io::Error),
    /// A line is missing, truncated, or not the JSON shape it should be.
    Malformed { line: usize, detail: String },
    /// The header comes from a different file format.
    UnsupportedVersion { found: u16 },
    /// Record sequence numbers must count up from zero without holes.
    SequenceGap { line: usize, expected: u64, found: u64 },
    /// A record's hash does not match what the chain says it should be.
    ChainMismatch { line: usize },
}

impl fmt::Display for JournalLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "journal I/O error: {e}"),
            Self::Malformed { line, detail } => {
                write!(f, "malformed journal line {line}: {detail}")
            }
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported journal format version {found}")
            }
            Self::SequenceGap { line, expected, found } => {
                write!(f, "journal line {line}: expected seq {expected}, found {found}")
            }
            Self::ChainMismatch { line } => {
                write!(f, "journal hash chain broken at line {line}")
            }
        }
    }
}

impl std::error::Error for JournalLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Load and verify a journal file, stopping at the first bad line.
pub fn load_journal_from_file(path: &Path) -> Result<LoadedJournal, JournalLoadError> {
    let content = fs::read_to_string(path).map_err(JournalLoadError::Io)?;
    if content.is_empty() {
        return Err(JournalLoadError::Malformed { line: 1, detail: "empty file".to_string() });
    }
    let lines: Vec<&str> = content.lines().collect();
    if !content.ends_with('\n') {
        return Err(JournalLoadError::Malformed {
            line: lines.len(),
            detail: "truncated line".to_string(),
        });
    }

    let header: FileHeader = serde_json::from_str(lines[0])
        .map_err(|e| JournalLoadError::Malformed { line: 1, detail: e.to_string() })?;
    if header.format_version != JOURNAL_FORMAT_VERSION {
        return Err(JournalLoadError::UnsupportedVersion { found: header.format_version });
    }

    let mut journal = InputJournal {
        format_version: header.format_version,
        build_id: header.build_id,
        content_hash: header.content_hash,
        seed: header.seed,
        inputs: Vec::new(),
    };
    let mut prev_sha256_hex = INITIAL_HASH.to_string();
    let mut next_seq: u64 = 0;

    for (line_index, line) in lines.iter().skip(1).enumerate() {
        // 1-indexed; the header is line 1.
        let line_number = line_index + 2;

        let record: FileRecord = serde_json::from_str(line).map_err(|e| {
            JournalLoadError::Malformed { line: line_number, detail: e.to_string() }
        })?;

        if record.seq != next_seq {
            return Err(JournalLoadError::SequenceGap {
                line: line_number,
                expected: next_seq,
                found: record.seq,
            });
        }
        if record.prev_sha256_hex != prev_sha256_hex {
            return Err(JournalLoadError::ChainMismatch { line: line_number });
        }
        let body = RecordBody { seq: record.seq, tick: record.tick, payload: &record.payload };
        let body_json = serde_json::to_string(&body).map_err(|e| {
            JournalLoadError::Malformed { line: line_number, detail: e.to_string() }
        })?;
        if record.sha256_hex != record_digest(&body_json, &prev_sha256_hex) {
            return Err(JournalLoadError::ChainMismatch { line: line_number });
        }

        prev_sha256_hex = record.sha256_hex.clone();
        journal.inputs.push(InputRecord { seq: record.seq, payload: record.payload });
        next_seq += 1;
    }

    Ok(LoadedJournal { journal, last_sha256_hex: prev_sha256_hex, next_seq })
}
