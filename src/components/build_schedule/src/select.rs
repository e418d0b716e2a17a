use crate::{CompileMode, Schedule, ScheduleError, ScheduleOptions, error::ScheduleErrorKind};
use ast::{DeclId, DeclKind, TranslationUnit};
use shader_model::StageKind;

/// Scans the top-level declarations and seeds the schedule with every
/// accepted entry point (and, in library mode, every exported function).
///
/// The scan validates everything before registering anything, so a
/// configuration error leaves the schedule untouched.
pub fn select_entry_points(
    unit: &TranslationUnit,
    options: &ScheduleOptions,
    schedule: &mut Schedule,
) -> Result<(), ScheduleError> {
    let mut seeds = Vec::new();

    match &options.mode {
        CompileMode::SingleShader { entry_name } => {
            for id in unit.top_level() {
                let DeclKind::Func(func) = &unit[id].kind else {
                    continue;
                };

                // A name match on a prototype is not accepted, so forward
                // declarations ahead of the real definition don't register.
                if func.name == *entry_name && func.is_definition {
                    seeds.push(Seed {
                        decl: id,
                        stage: options.model.kind,
                        is_entry: true,
                    });
                }
            }

            if seeds.is_empty() {
                return Err(ScheduleErrorKind::EntryPointNotFound {
                    name: entry_name.clone(),
                }
                .plain());
            }
        }
        CompileMode::Library => {
            for id in unit.top_level() {
                let DeclKind::Func(func) = &unit[id].kind else {
                    continue;
                };

                if let Some(attr) = &func.attrs.stage {
                    // Compiling as a library: everything with a stage
                    // attribute is an entry point.
                    let stage =
                        StageKind::from_attr_name(&attr.stage_name).ok_or_else(|| {
                            ScheduleErrorKind::UnknownStageAttribute {
                                name: attr.stage_name.clone(),
                            }
                            .at(attr.source)
                        })?;

                    seeds.push(Seed {
                        decl: id,
                        stage,
                        is_entry: true,
                    });
                } else if func.attrs.export {
                    seeds.push(Seed {
                        decl: id,
                        stage: options.model.kind,
                        is_entry: false,
                    });
                }

                // A function with neither attribute may still be reached
                // later through callee discovery.
            }
        }
    }

    for seed in seeds {
        schedule.register(seed.decl, seed.stage, seed.is_entry);
    }

    Ok(())
}

struct Seed {
    decl: DeclId,
    stage: StageKind,
    is_entry: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScheduleOptions;
    use ast::{Decl, FuncAttrs, FuncDecl, StageAttr};
    use source_files::Source;

    #[test]
    fn configuration_error_leaves_schedule_empty() {
        let mut unit = TranslationUnit::new();

        unit.add_top_level(Decl::new(
            DeclKind::Func(FuncDecl {
                name: "vs".into(),
                attrs: FuncAttrs {
                    stage: Some(StageAttr {
                        stage_name: "vertex".into(),
                        source: Source::internal(),
                    }),
                    export: false,
                },
                is_definition: true,
            }),
            Source::internal(),
        ));

        unit.add_top_level(Decl::new(
            DeclKind::Func(FuncDecl {
                name: "ts".into(),
                attrs: FuncAttrs {
                    stage: Some(StageAttr {
                        stage_name: "tesselation".into(),
                        source: Source::internal(),
                    }),
                    export: false,
                },
                is_definition: true,
            }),
            Source::internal(),
        ));

        let options = ScheduleOptions::library(6, 3);
        let mut schedule = Schedule::new();

        let error = select_entry_points(&unit, &options, &mut schedule).unwrap_err();

        assert_eq!(
            error.kind,
            ScheduleErrorKind::UnknownStageAttribute {
                name: "tesselation".into()
            }
        );

        // Even though `vs` scanned clean first, nothing was registered.
        assert!(schedule.is_empty());
    }
}
