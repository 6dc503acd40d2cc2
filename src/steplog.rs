use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::{ErraticismError, Result};
use crate::trajectory::parse_line;
use crate::types::RawStepRecord;

pub const DEFAULT_STEPLOG: &str = "2017-01-20Z14-30-05.steplog";

/// Records recovered from a step log plus line accounting.
#[derive(Clone, Debug, Default)]
pub struct ParsedLog {
    pub records: Vec<RawStepRecord>,
    pub lines_read: usize,
    pub skipped_lines: usize,
}

/// Read records line by line, skipping anything that does not parse.
pub fn parse_steplog<R: BufRead>(reader: R) -> io::Result<ParsedLog> {
    let mut parsed = ParsedLog::default();

    for raw in reader.split(b'\n') {
        let raw = raw?;
        parsed.lines_read += 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
        match std::str::from_utf8(raw).ok().and_then(parse_line) {
            Some(record) => parsed.records.push(record),
            None => {
                parsed.skipped_lines += 1;
                log::debug!(
                    "Skipping malformed line {}: {:?}",
                    parsed.lines_read,
                    String::from_utf8_lossy(raw)
                );
            }
        }
    }

    if parsed.skipped_lines > 0 {
        log::warn!(
            "Skipped {} of {} step log lines that did not parse",
            parsed.skipped_lines,
            parsed.lines_read
        );
    }

    Ok(parsed)
}

/// Load a `.steplog` file, decompressing `.gz` files on the fly.
pub fn load_steplog(path: &Path) -> Result<ParsedLog> {
    let file = File::open(path).map_err(|e| ErraticismError::io(path, e))?;
    let parsed = if path.extension().map(|e| e == "gz").unwrap_or(false) {
        parse_steplog(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_steplog(BufReader::new(file))
    }
    .map_err(|e| ErraticismError::io(path, e))?;

    log::info!(
        "Loaded {} steps from {}",
        parsed.records.len(),
        path.display()
    );
    Ok(parsed)
}

/// Ask for a step log path on the given streams; an empty answer picks the default.
pub fn prompt_steplog_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<PathBuf> {
    write!(
        output,
        "Enter the steplog file path (or press Enter to use the default): "
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    if answer.is_empty() {
        writeln!(output, "Using the default steplog file: {}", DEFAULT_STEPLOG)?;
        Ok(PathBuf::from(DEFAULT_STEPLOG))
    } else {
        Ok(PathBuf::from(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_counts_skipped_lines() {
        let text = "0,1.0,0.0,0,0\ngarbage\n\n1000,1.0,0.0,0,0\n";
        let parsed = parse_steplog(Cursor::new(text)).unwrap();
        assert_eq!(parsed.lines_read, 4);
        assert_eq!(parsed.skipped_lines, 2);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].timestamp, 1000);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let bytes: &[u8] = b"0,1.0,0.0,0,0\n\xff\xfe,\n2,1.0,0.0,0,0\n";
        let parsed = parse_steplog(Cursor::new(bytes)).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.skipped_lines, 1);
        assert_eq!(parsed.lines_read, 3);
        assert_eq!(parsed.records[0].timestamp, 0);
        assert_eq!(parsed.records[1].timestamp, 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_steplog(Cursor::new("0,1.0,0.0,0,0\r\n5,1.0,0.0,0,0\r\n")).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.skipped_lines, 0);
    }

    #[test]
    fn test_prompt_default() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        let path = prompt_steplog_path(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from(DEFAULT_STEPLOG));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Using the default steplog file"));
    }

    #[test]
    fn test_prompt_custom_path() {
        let mut input = Cursor::new("  walks/park.steplog \n");
        let mut output = Vec::new();
        let path = prompt_steplog_path(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("walks/park.steplog"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_steplog(Path::new("/nonexistent/missing.steplog")).unwrap_err();
        assert!(err.to_string().contains("missing.steplog"));
    }
}
