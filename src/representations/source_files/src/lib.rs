mod file;
mod key;
mod source;

pub use file::SourceFile;
pub use key::SourceFileKey;
pub use source::{Location, Source};
use std::path::PathBuf;

#[derive(Debug)]
pub struct SourceFiles {
    files: Vec<SourceFile>,
}

impl SourceFiles {
    pub const INTERNAL_KEY: SourceFileKey = SourceFileKey(0);

    pub fn new() -> Self {
        // Create the <internal> file, used for code created by the compiler itself
        Self {
            files: vec![SourceFile::new("<internal>".into(), "".into())],
        }
    }

    pub fn get(&self, key: SourceFileKey) -> &SourceFile {
        &self.files[key.0 as usize]
    }

    pub fn add(&mut self, filename: PathBuf, content: String) -> SourceFileKey {
        let key = SourceFileKey(self.files.len().try_into().unwrap());
        self.files.push(SourceFile::new(filename, content));
        key
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self::new()
    }
}
