// crates/postcode-core/src/loader/snapshot.rs
use super::common_io;
use crate::error::{PostcodeError, Result};
use crate::model::{PostcodeDb, CACHE_SUFFIX};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl Default for CompressionMode {
    fn default() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

// -----------------------------------------------------------------------------
// SNAPSHOTS (a built PostcodeDb, bincode encoded)
// -----------------------------------------------------------------------------

impl PostcodeDb {
    /// Where [`PostcodeDb::save_snapshot`] puts the cache for `data_path`
    /// unless told otherwise.
    pub fn default_snapshot_path(data_path: impl AsRef<Path>) -> PathBuf {
        common_io::get_cache_path(data_path.as_ref(), CACHE_SUFFIX)
    }

    /// Writes the whole built database to `path`.
    pub fn save_snapshot(&self, path: impl AsRef<Path>, compression: CompressionMode) -> Result<()> {
        let path = path.as_ref();
        write_generic(path, self, compression)?;
        tracing::info!(path = %path.display(), ?compression, "snapshot written");
        Ok(())
    }

    /// Reads a database written by [`PostcodeDb::save_snapshot`].
    ///
    /// Gzip is detected from the file header, not from the name.
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_sniffed(path)?;
        let db: PostcodeDb = bincode::deserialize_from(reader)?;
        tracing::info!(
            path = %path.display(),
            postcodes = db.stats.postcodes,
            cities = db.stats.cities,
            "snapshot loaded"
        );
        Ok(db)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(data)?)
    }
}

/// `true` for paths the CLI treats as snapshots rather than JSON sources.
pub fn is_snapshot_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}

/// Writes ANY serializable struct to disk, optionally gzip-wrapped.
///
/// The gzip trailer and the final buffer flush are written explicitly so a
/// failing disk surfaces as an error instead of a truncated file.
fn write_generic<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path).map_err(|e| PostcodeError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            bincode::serialize_into(&mut encoder, value)?;
            writer = encoder.finish().map_err(|e| PostcodeError::io(path, e))?;
        }
        #[cfg(not(feature = "compact"))]
        CompressionMode::Gzip => {
            return Err(PostcodeError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ));
        }
        CompressionMode::None => bincode::serialize_into(&mut writer, value)?,
    }

    let file = writer
        .into_inner()
        .map_err(|e| PostcodeError::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| PostcodeError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CanonicalCity, CanonicalState};
    use crate::traits::PostcodeSearch;
    use tempfile::TempDir;

    fn sample() -> PostcodeDb {
        PostcodeDb::from_states(vec![CanonicalState {
            name: "Terengganu".into(),
            code: "TRG".into(),
            cities: vec![CanonicalCity {
                name: "Kuala Terengganu".into(),
                postcodes: vec!["20000".into(), "20050".into()],
            }],
        }])
    }

    #[test]
    fn bytes_reproduce_the_database() {
        let db = sample();
        let back = PostcodeDb::from_bytes(&db.to_bytes().unwrap()).unwrap();
        assert_eq!(back, db);
    }

    #[test]
    fn uncompressed_snapshot_on_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("db.bin");
        let db = sample();

        db.save_snapshot(&path, CompressionMode::None).unwrap();
        let back = PostcodeDb::load_snapshot(&path).unwrap();
        assert_eq!(back.lookup_by_postcode("20050"), db.lookup_by_postcode("20050"));
        assert_eq!(back.stats(), db.stats());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_snapshot_is_detected_by_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("db.comp.bin");
        let db = sample();

        db.save_snapshot(&path, CompressionMode::Gzip).unwrap();
        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);
        assert_eq!(PostcodeDb::load_snapshot(&path).unwrap(), db);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_snapshot_is_a_complete_stream() {
        use flate2::read::GzDecoder;
        use std::io::Read;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("db.comp.bin");
        let db = sample();
        db.save_snapshot(&path, CompressionMode::Gzip).unwrap();

        // a stream without its trailer fails to decode to the end
        let mut plain = Vec::new();
        GzDecoder::new(std::fs::File::open(&path).unwrap())
            .read_to_end(&mut plain)
            .unwrap();
        assert_eq!(plain, db.to_bytes().unwrap());
    }

    #[test]
    fn unwritable_target_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("db.bin");
        let err = sample().save_snapshot(&path, CompressionMode::None).unwrap_err();
        assert!(matches!(err, PostcodeError::Io { .. }));
    }

    #[test]
    fn garbage_is_a_snapshot_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("junk.bin");
        std::fs::write(&path, [0xff; 3]).unwrap();
        assert!(matches!(
            PostcodeDb::load_snapshot(&path),
            Err(PostcodeError::Snapshot(_))
        ));
    }

    #[test]
    fn snapshot_paths() {
        assert!(is_snapshot_path(Path::new("data.comp.bin")));
        assert!(!is_snapshot_path(Path::new("data")));
        assert_eq!(
            PostcodeDb::default_snapshot_path("data"),
            PathBuf::from(format!("data{CACHE_SUFFIX}"))
        );
    }
}
