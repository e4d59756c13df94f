//! Input files, plain or gzip compressed

use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::{self, prelude::*},
    path::Path,
};

/// Reads the whole content of `path`
///
/// Files with a `.gz` extension are decompressed on the fly.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => {
            let mut gz = GzDecoder::new(file);
            gz.read_to_string(&mut contents)?;
        }
        _ => {
            file.read_to_string(&mut contents)?;
        }
    }
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::error::Error;

    #[test]
    fn plain_and_gzip() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let text = "Throughput: 1.5e6 particles/s\n";

        let plain = dir.path().join("run.log");
        std::fs::write(&plain, text)?;
        assert_eq!(read_to_string(&plain)?, text);

        let packed = dir.path().join("run.log.gz");
        let mut gz = GzEncoder::new(File::create(&packed)?, Compression::default());
        gz.write_all(text.as_bytes())?;
        gz.finish()?;
        assert_eq!(read_to_string(&packed)?, text);
        Ok(())
    }

    #[test]
    fn missing_file() {
        assert!(read_to_string("no/such/file.txt").is_err());
    }
}
