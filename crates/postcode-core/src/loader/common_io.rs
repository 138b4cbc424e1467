// crates/postcode-core/src/loader/common_io.rs
use crate::error::{PostcodeError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// `true` when the file name ends in `.gz`.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a file, buffers it and, for `.gz` names, wraps it in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let reader = open_buffered(path)?;

    if !is_gzip_path(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PostcodeError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

/// Opens a file and sniffs the first bytes for a gzip header instead of
/// trusting the extension. Used for snapshots.
pub fn open_sniffed(path: &Path) -> Result<Box<dyn Read>> {
    let mut file = open_buffered(path)?;
    let mut head = [0u8; 2];
    let n = file
        .read(&mut head)
        .map_err(|e| PostcodeError::io(path, e))?;
    let prefix = std::io::Cursor::new(head[..n].to_vec());
    let stream = prefix.chain(file);

    if n < 2 || head != GZIP_MAGIC {
        return Ok(Box::new(stream));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(stream)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PostcodeError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

fn open_buffered(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PostcodeError::PathNotFound(path.to_path_buf()),
        _ => PostcodeError::io(path, e),
    })?;
    Ok(BufReader::new(file))
}

/// Snapshot path that sits next to `data_path`, e.g. `data` -> `data.comp.bin`.
pub fn get_cache_path(data_path: &Path, suffix: &str) -> PathBuf {
    let filename = data_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "postcodes".to_owned());
    data_path.with_file_name(format!("{filename}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cache_path_sits_next_to_source() {
        assert_eq!(
            get_cache_path(Path::new("/srv/data"), ".bin"),
            PathBuf::from("/srv/data.bin")
        );
        assert_eq!(
            get_cache_path(Path::new("all.json"), ".comp.bin"),
            PathBuf::from("all.json.comp.bin")
        );
    }

    #[test]
    fn missing_file_is_path_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json")).err().unwrap();
        assert!(matches!(err, PostcodeError::PathNotFound(_)));
    }

    #[test]
    fn sniffed_plain_file_reads_through() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"plain bytes").unwrap();

        let mut out = String::new();
        open_sniffed(tmp.path())
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "plain bytes");
    }
}
