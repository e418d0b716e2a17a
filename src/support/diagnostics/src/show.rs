use source_files::{Source, SourceFiles};
use std::path::Path;

pub trait Show {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result;

    fn eprintln(&self, source_files: &SourceFiles) {
        let mut message = String::new();
        self.show(&mut message, source_files, None).unwrap();
        eprintln!("{}", message);
    }
}

pub fn into_show<T: Show + 'static>(show: T) -> Box<dyn Show> {
    Box::new(show)
}

pub fn minimal_filename<'a>(
    source: Source,
    source_files: &'a SourceFiles,
    project_root: Option<&Path>,
) -> &'a str {
    let filename = source_files.get(source.key).filename();

    project_root
        .and_then(|root| root.to_str())
        .and_then(|root| filename.strip_prefix(root))
        .map(|rest| rest.trim_start_matches(['/', '\\']))
        .unwrap_or(filename)
}
