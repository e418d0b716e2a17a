/*
    ==================  components/build_schedule/src/lib.rs  =================
    Entry-point discovery and reachability scheduling for translation
    ---------------------------------------------------------------------------
    Decides which functions are compilation entry points, assigns each a
    target stage, and drives the worklist that hands every reachable
    declaration to the emission stage exactly once.
*/

mod classify;
mod error;
mod queue;
mod select;

pub use classify::{DeclHandler, do_decl};
pub use error::{ScheduleError, ScheduleErrorKind};
pub use queue::{Schedule, WorkItem, WorkItemId};

use ast::{DeclKind, TranslationUnit};
use derive_more::IsVariant;
use diagnostics::Diagnostics;
use shader_model::{ShaderModel, StageKind};

#[derive(Clone, Debug, IsVariant)]
pub enum CompileMode {
    /// One configured entry point compiled for one target stage.
    SingleShader { entry_name: String },

    /// Every stage-attributed function is its own entry point.
    Library,
}

/// Immutable per-run configuration. One value per translation run, so
/// independent runs can't observe each other's state.
#[derive(Clone, Debug)]
pub struct ScheduleOptions {
    pub mode: CompileMode,
    pub model: ShaderModel,
}

impl ScheduleOptions {
    pub fn single_shader(entry_name: impl ToString, model: ShaderModel) -> Self {
        assert!(model.kind != StageKind::Invalid && model.kind != StageKind::Library);

        Self {
            mode: CompileMode::SingleShader {
                entry_name: entry_name.to_string(),
            },
            model,
        }
    }

    pub fn library(major: u32, minor: u32) -> Self {
        Self {
            mode: CompileMode::Library,
            model: ShaderModel::new(StageKind::Library, major, minor),
        }
    }
}

/// Builds the emission schedule for a translation unit.
///
/// Seeds the worklist with the entry points selected under `options`, then
/// routes the remaining top-level declarations through the classification
/// policy. Configuration errors abort before any declaration reaches the
/// handler. The returned [`Schedule`] is ready to [`drain`].
pub fn build_schedule(
    unit: &TranslationUnit,
    options: &ScheduleOptions,
    handler: &mut impl DeclHandler,
    diagnostics: &Diagnostics,
) -> Result<Schedule, ScheduleError> {
    let mut schedule = Schedule::new();
    select::select_entry_points(unit, options, &mut schedule)?;

    for id in unit.top_level() {
        if schedule.is_scheduled(id) {
            continue;
        }

        // In library mode, unattributed functions are left for callee
        // discovery during emission rather than classified here.
        if options.mode.is_library() && matches!(unit[id].kind, DeclKind::Func(_)) {
            continue;
        }

        do_decl(unit, id, handler, diagnostics);
    }

    Ok(schedule)
}

/// Drains the worklist in FIFO order, handing each work item to the
/// handler. Handlers may register callees mid-drain; those are processed
/// in turn until the queue is exhausted.
pub fn drain(unit: &TranslationUnit, schedule: &mut Schedule, handler: &mut impl DeclHandler) {
    while let Some(id) = schedule.advance() {
        let item = *schedule.item(id);
        handler.on_work_item(unit, item, schedule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{Decl, DeclId, FuncAttrs, FuncDecl, StageAttr, VarDecl};
    use diagnostics::DiagnosticFlags;
    use itertools::Itertools;
    use source_files::{Source, SourceFiles};

    fn func(name: &str, is_definition: bool, attrs: FuncAttrs) -> Decl {
        Decl::new(
            DeclKind::Func(FuncDecl {
                name: name.to_string(),
                attrs,
                is_definition,
            }),
            Source::internal(),
        )
    }

    fn stage_attr(stage_name: &str) -> FuncAttrs {
        FuncAttrs {
            stage: Some(StageAttr {
                stage_name: stage_name.to_string(),
                source: Source::internal(),
            }),
            export: false,
        }
    }

    fn export_attr() -> FuncAttrs {
        FuncAttrs {
            stage: None,
            export: true,
        }
    }

    #[derive(Debug, Default)]
    struct RecordingHandler {
        classified: Vec<String>,
        emitted: Vec<DeclId>,
        register_on_emit: Vec<(DeclId, DeclId)>,
    }

    impl DeclHandler for RecordingHandler {
        fn on_func(&mut self, _unit: &TranslationUnit, _id: DeclId, func: &FuncDecl) {
            self.classified.push(format!("func {}", func.name));
        }

        fn on_var(&mut self, _unit: &TranslationUnit, _id: DeclId, var: &VarDecl) {
            self.classified.push(format!("var {}", var.name));
        }

        fn on_work_item(
            &mut self,
            _unit: &TranslationUnit,
            item: WorkItem,
            schedule: &mut Schedule,
        ) {
            self.emitted.push(item.decl);

            for (caller, callee) in self.register_on_emit.iter().copied() {
                if caller == item.decl {
                    schedule.register(callee, item.stage, false);
                }
            }
        }
    }

    fn run(
        unit: &TranslationUnit,
        options: &ScheduleOptions,
    ) -> Result<(Schedule, RecordingHandler), ScheduleError> {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, DiagnosticFlags::default());
        let mut handler = RecordingHandler::default();
        let schedule = build_schedule(unit, options, &mut handler, &diagnostics)?;
        Ok((schedule, handler))
    }

    #[test]
    fn single_shader_prefers_definition_over_prototype() {
        let mut unit = TranslationUnit::new();
        let _proto = unit.add_top_level(func("f", false, FuncAttrs::default()));
        let _other = unit.add_top_level(func("other", true, FuncAttrs::default()));
        let definition = unit.add_top_level(func("f", true, FuncAttrs::default()));

        let model = ShaderModel::get_by_name("cs_6_0").unwrap();
        let options = ScheduleOptions::single_shader("f", model);
        let (schedule, handler) = run(&unit, &options).unwrap();

        assert_eq!(schedule.len(), 1);

        let item = schedule.get(definition).unwrap();
        assert_eq!(item.stage, StageKind::Compute);
        assert!(item.is_entry);

        // The prototype and the unrelated function both took the generic
        // classification path instead.
        assert_eq!(handler.classified, vec!["func f", "func other"]);
    }

    #[test]
    fn single_shader_missing_entry_is_fatal() {
        let mut unit = TranslationUnit::new();
        unit.add_top_level(func("main", false, FuncAttrs::default()));

        let model = ShaderModel::get_by_name("vs_6_0").unwrap();
        let options = ScheduleOptions::single_shader("main", model);
        let error = run(&unit, &options).unwrap_err();

        assert_eq!(
            error.kind,
            ScheduleErrorKind::EntryPointNotFound {
                name: "main".into()
            }
        );
    }

    #[test]
    fn library_mode_registers_tagged_and_exported_functions() {
        let mut unit = TranslationUnit::new();
        let vs = unit.add_top_level(func("vs", true, stage_attr("vertex")));
        let ps = unit.add_top_level(func("ps", true, stage_attr("pixel")));
        let helper = unit.add_top_level(func("helper", true, export_attr()));
        let _plain = unit.add_top_level(func("plain", true, FuncAttrs::default()));

        let options = ScheduleOptions::library(6, 3);
        let (schedule, handler) = run(&unit, &options).unwrap();

        assert_eq!(schedule.len(), 3);

        let entries = schedule
            .items()
            .map(|item| (item.decl, item.stage, item.is_entry))
            .collect_vec();

        assert_eq!(
            entries,
            vec![
                (vs, StageKind::Vertex, true),
                (ps, StageKind::Pixel, true),
                (helper, StageKind::Library, false),
            ]
        );

        // Untagged functions wait for callee discovery.
        assert!(handler.classified.is_empty());
    }

    #[test]
    fn library_mode_unknown_stage_is_fatal_with_zero_work_items() {
        let mut unit = TranslationUnit::new();
        unit.add_top_level(func("vs", true, stage_attr("vertex")));
        unit.add_top_level(func("ts", true, stage_attr("tesselation")));

        let options = ScheduleOptions::library(6, 3);
        let error = run(&unit, &options).unwrap_err();

        assert_eq!(
            error.kind,
            ScheduleErrorKind::UnknownStageAttribute {
                name: "tesselation".into()
            }
        );
    }

    #[test]
    fn drain_visits_callees_discovered_mid_emission() {
        let mut unit = TranslationUnit::new();
        let entry = unit.add_top_level(func("main", true, FuncAttrs::default()));
        let callee = unit.add_top_level(func("helper", true, FuncAttrs::default()));

        let model = ShaderModel::get_by_name("cs_6_0").unwrap();
        let options = ScheduleOptions::single_shader("main", model);

        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, DiagnosticFlags::default());

        let mut handler = RecordingHandler {
            register_on_emit: vec![(entry, callee)],
            ..Default::default()
        };

        let mut schedule = build_schedule(&unit, &options, &mut handler, &diagnostics).unwrap();
        drain(&unit, &mut schedule, &mut handler);

        assert_eq!(handler.emitted, vec![entry, callee]);
        assert!(!schedule.get(callee).unwrap().is_entry);
    }

    #[test]
    fn top_level_variables_take_the_classification_path() {
        let mut unit = TranslationUnit::new();
        unit.add_top_level(Decl::new(
            DeclKind::Var(VarDecl {
                name: "gCounter".into(),
            }),
            Source::internal(),
        ));
        unit.add_top_level(func("main", true, FuncAttrs::default()));

        let model = ShaderModel::get_by_name("ps_6_0").unwrap();
        let options = ScheduleOptions::single_shader("main", model);
        let (_schedule, handler) = run(&unit, &options).unwrap();

        assert_eq!(handler.classified, vec!["var gCounter"]);
    }
}
