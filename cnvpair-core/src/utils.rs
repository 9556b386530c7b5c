use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Stdout, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open file {}: {e}", path.display()))
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Output sink returned by [`get_dynamic_writer`].
///
/// Call [`DynamicWriter::finish`] when done: for gzip output it writes the trailer and
/// reports any error doing so.
pub enum DynamicWriter {
    Stdout(BufWriter<Stdout>),
    File(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl DynamicWriter {
    pub fn finish(self) -> io::Result<()> {
        match self {
            DynamicWriter::Stdout(mut w) => w.flush(),
            DynamicWriter::File(mut w) => w.flush(),
            DynamicWriter::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for DynamicWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DynamicWriter::Stdout(w) => w.write(buf),
            DynamicWriter::File(w) => w.write(buf),
            DynamicWriter::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DynamicWriter::Stdout(w) => w.flush(),
            DynamicWriter::File(w) => w.flush(),
            DynamicWriter::Gzip(w) => w.flush(),
        }
    }
}

///
/// Get a writer for a file (gzip'd when the path ends in `.gz`) or stdout.
///
/// Parent directories are created as needed.
///
/// # Arguments
///
/// - path: where to write, `None` or `-` for stdout
pub fn get_dynamic_writer(path: Option<&Path>) -> io::Result<DynamicWriter> {
    match path {
        None => Ok(DynamicWriter::Stdout(BufWriter::new(io::stdout()))),
        Some(p) if p == Path::new("-") => Ok(DynamicWriter::Stdout(BufWriter::new(io::stdout()))),
        Some(p) => {
            if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = BufWriter::new(File::create(p)?);
            if p.extension() == Some(OsStr::new("gz")) {
                Ok(DynamicWriter::Gzip(GzEncoder::new(file, Compression::default())))
            } else {
                Ok(DynamicWriter::File(file))
            }
        }
    }
}

///
/// Sample identifier for a file: its base name up to the first `.`.
///
/// `/data/TR_01.tumor.cns` becomes `TR_01`.
pub fn sample_id_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    match name.split_once('.') {
        Some((base, _)) if !base.is_empty() => base.to_string(),
        _ => name,
    }
}
