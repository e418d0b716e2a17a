use diagnostics::{Show, minimal_filename};
use source_files::{Source, SourceFiles};
use std::{fmt::Display, path::Path};

/// A fatal configuration error, reported before any queue work begins.
#[derive(Debug)]
pub struct ScheduleError {
    pub kind: ScheduleErrorKind,
    pub source: Option<Source>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleErrorKind {
    EntryPointNotFound { name: String },
    UnknownStageAttribute { name: String },
}

impl ScheduleErrorKind {
    pub fn at(self, source: Source) -> ScheduleError {
        ScheduleError {
            kind: self,
            source: Some(source),
        }
    }

    pub fn plain(self) -> ScheduleError {
        ScheduleError {
            kind: self,
            source: None,
        }
    }
}

impl Display for ScheduleErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleErrorKind::EntryPointNotFound { name } => {
                write!(f, "Entry point '{}' is not defined", name)
            }
            ScheduleErrorKind::UnknownStageAttribute { name } => {
                write!(f, "Unknown shader stage '{}'", name)
            }
        }
    }
}

impl Show for ScheduleError {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        if let Some(source) = self.source {
            write!(
                w,
                "{}:{}:{}: error: {}",
                minimal_filename(source, source_files, project_root),
                source.location.line,
                source.location.column,
                self.kind,
            )
        } else {
            write!(w, "error: {}", self.kind)
        }
    }
}
