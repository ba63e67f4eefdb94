//! File boundary operations and the interactive menu.
//!
//! The transform core works purely on in-memory byte slices; everything
//! that touches paths, prompts, or process streams lives here.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use tracing::info;

use zagan_core::{Decoder, Encoder, Error, Result, Transform, TransformStats};
use zagan_dbr::{DbrDecoder, DbrEncoder};

/// Menu selection: 0 encodes, 1 decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Encode,
    Decode,
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "0" => Ok(Selection::Encode),
            "1" => Ok(Selection::Decode),
            other => Err(Error::invalid_selection(other)),
        }
    }
}

/// Encode a file into a DBR artifact.
///
/// Reads the whole input, transforms it in memory, writes the whole
/// artifact. I/O failures name the offending path.
pub fn encode_file(input: &Path, output: &Path) -> Result<TransformStats> {
    let data = read_all(input)?;

    let start = Instant::now();
    let artifact = DbrEncoder::new().encode(&data)?;
    let elapsed = start.elapsed();

    write_all(output, &artifact)?;

    let stats = TransformStats::from_operation(
        Transform::Dbr,
        data.len(),
        artifact.len(),
        elapsed.as_micros() as u64,
    );
    info!(
        input = %input.display(),
        output = %output.display(),
        input_len = stats.input_size,
        artifact_len = stats.output_size,
        "encoded"
    );
    println!(
        "Encoding successful. Output written to '{}'",
        output.display()
    );
    Ok(stats)
}

/// Decode a DBR artifact back into the original bytes.
pub fn decode_file(input: &Path, output: &Path) -> Result<TransformStats> {
    let artifact = read_all(input)?;

    let start = Instant::now();
    let restored = DbrDecoder::new().decode(&artifact)?;
    let elapsed = start.elapsed();

    write_all(output, &restored)?;

    let stats = TransformStats::from_operation(
        Transform::Dbr,
        artifact.len(),
        restored.len(),
        elapsed.as_micros() as u64,
    );
    info!(
        input = %input.display(),
        output = %output.display(),
        artifact_len = stats.input_size,
        output_len = stats.output_size,
        "decoded"
    );
    println!(
        "Decoding successful. Output written to '{}'",
        output.display()
    );
    Ok(stats)
}

/// Run the interactive menu: selector, then input and output file names.
///
/// A selector outside {0, 1} reports the error and performs no transform.
pub fn run_interactive() -> Result<TransformStats> {
    println!(">>>>>Welcome to Dynamic Byte Remapping (DBR) Encoder/Decoder!");
    let choice = prompt(">>>>>Press 0 for encoding, Press 1 for decoding: ")?;
    let selection = Selection::from_str(&choice)?;

    match selection {
        Selection::Encode => {
            let input = prompt(">>  Enter the input file name: ")?;
            let output = prompt(">>  Enter the output file name: ")?;
            encode_file(Path::new(input.trim()), Path::new(output.trim()))
        }
        Selection::Decode => {
            let input = prompt(">>  Enter the input file name (encoded): ")?;
            let output = prompt(">>  Enter the output file name (decoded): ")?;
            decode_file(Path::new(input.trim()), Path::new(output.trim()))
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn read_all(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .map_err(|e| Error::io(format!("unable to read input file '{}': {e}", path.display())))
}

fn write_all(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)
        .map_err(|e| Error::io(format!("unable to write output file '{}': {e}", path.display())))
}
