use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_to_string_maybe_gz(path: &Path) -> Result<String, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[derive(Debug, Clone)]
pub struct SourceResolution {
    pub name: String,
    pub path: PathBuf,
    pub exists: bool,
}

pub fn resolve_version_source(data_dir: &Path, version_tag: &str) -> SourceResolution {
    let candidates = [format!("{version_tag}.json"), format!("{version_tag}.json.gz")];
    for name in &candidates {
        let path = data_dir.join(name);
        if path.is_file() {
            return SourceResolution {
                name: name.clone(),
                path,
                exists: true,
            };
        }
    }
    let name = candidates[0].clone();
    SourceResolution {
        path: data_dir.join(&name),
        name,
        exists: false,
    }
}
