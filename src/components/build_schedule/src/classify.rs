use crate::{Schedule, WorkItem};
use ast::{
    BufferDecl, DeclId, DeclKind, EnumDecl, FuncDecl, RecordDecl, TemplateDecl, TranslationUnit,
    VarDecl,
};
use diagnostics::{Diagnostics, ErrorDiagnostic};

/// The downstream declaration classifier. Each routed declaration kind gets
/// its own handler method; all of them default to doing nothing, so a
/// handler only implements the kinds it emits.
///
/// `on_work_item` receives a `&mut Schedule` so that emitting a function can
/// register the callees it discovers.
pub trait DeclHandler {
    fn on_var(&mut self, _unit: &TranslationUnit, _id: DeclId, _var: &VarDecl) {}

    fn on_func(&mut self, _unit: &TranslationUnit, _id: DeclId, _func: &FuncDecl) {}

    fn on_buffer(&mut self, _unit: &TranslationUnit, _id: DeclId, _buffer: &BufferDecl) {}

    fn on_record(&mut self, _unit: &TranslationUnit, _id: DeclId, _record: &RecordDecl) {}

    fn on_enum(&mut self, _unit: &TranslationUnit, _id: DeclId, _enumeration: &EnumDecl) {}

    fn on_class_template(
        &mut self,
        _unit: &TranslationUnit,
        _id: DeclId,
        _template: &TemplateDecl,
    ) {
    }

    fn on_work_item(&mut self, _unit: &TranslationUnit, _item: WorkItem, _schedule: &mut Schedule) {
    }
}

/// Routes one declaration according to the fixed classification policy.
///
/// A declaration kind not covered here is reported and skipped; one bad
/// declaration must not prevent emission of the rest of the program.
pub fn do_decl(
    unit: &TranslationUnit,
    id: DeclId,
    handler: &mut impl DeclHandler,
    diagnostics: &Diagnostics,
) {
    let decl = &unit[id];

    // Implicit decls are lazily created when needed.
    if decl.is_implicit {
        return;
    }

    match &decl.kind {
        DeclKind::Empty => {}
        DeclKind::Template(template) if template.kind.is_type_alias() || template.kind.is_var() => {
        }
        DeclKind::Var(var) => handler.on_var(unit, id, var),
        DeclKind::Namespace(namespace) => {
            // Functions are only emitted as they are discovered through the
            // call graph starting from the entry points. Blind descent here
            // would emit unused functions inside namespaces.
            for child in namespace.children.iter().copied() {
                if !unit[child].kind.is_func() {
                    do_decl(unit, child, handler, diagnostics);
                }
            }
        }
        DeclKind::Func(func) => handler.on_func(unit, id, func),
        DeclKind::Buffer(buffer) => handler.on_buffer(unit, id, buffer),
        DeclKind::Record(record) => handler.on_record(unit, id, record),
        DeclKind::Enum(enumeration) => handler.on_enum(unit, id, enumeration),
        DeclKind::Template(template) if template.kind.is_class() => {
            handler.on_class_template(unit, id, template)
        }
        // Type aliases are resolved at use site, function templates at
        // instantiation site.
        DeclKind::TypeAlias(_) => {}
        DeclKind::Template(_) => {}
        DeclKind::Using(_) => {}
        _ => diagnostics.push(ErrorDiagnostic::new(
            "unrecognized declaration kind",
            decl.source,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{Decl, FuncAttrs, NamespaceDecl, TypeAliasDecl};
    use diagnostics::DiagnosticFlags;
    use source_files::{Source, SourceFiles};

    #[derive(Default)]
    struct RecordingHandler {
        routed: Vec<String>,
    }

    impl DeclHandler for RecordingHandler {
        fn on_var(&mut self, _unit: &TranslationUnit, _id: DeclId, var: &VarDecl) {
            self.routed.push(format!("var {}", var.name));
        }

        fn on_func(&mut self, _unit: &TranslationUnit, _id: DeclId, func: &FuncDecl) {
            self.routed.push(format!("func {}", func.name));
        }

        fn on_record(&mut self, _unit: &TranslationUnit, _id: DeclId, record: &RecordDecl) {
            self.routed.push(format!("record {}", record.name));
        }
    }

    #[test]
    fn namespace_descent_skips_functions() {
        let mut unit = TranslationUnit::new();

        let hidden = unit.add(Decl::new(
            DeclKind::Func(FuncDecl {
                name: "hidden".into(),
                attrs: FuncAttrs::default(),
                is_definition: true,
            }),
            Source::internal(),
        ));

        let record = unit.add(Decl::new(
            DeclKind::Record(RecordDecl {
                name: "Inner".into(),
            }),
            Source::internal(),
        ));

        let namespace = unit.add_top_level(Decl::new(
            DeclKind::Namespace(NamespaceDecl {
                name: "ns".into(),
                children: vec![hidden, record],
            }),
            Source::internal(),
        ));

        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, DiagnosticFlags::default());
        let mut handler = RecordingHandler::default();

        do_decl(&unit, namespace, &mut handler, &diagnostics);

        assert_eq!(handler.routed, vec!["record Inner"]);
    }

    #[test]
    fn implicit_and_empty_decls_are_skipped() {
        let mut unit = TranslationUnit::new();

        let implicit = unit.add_top_level(Decl::implicit(
            DeclKind::Var(VarDecl { name: "gen".into() }),
            Source::internal(),
        ));
        let empty = unit.add_top_level(Decl::new(DeclKind::Empty, Source::internal()));
        let alias = unit.add_top_level(Decl::new(
            DeclKind::TypeAlias(TypeAliasDecl { name: "T".into() }),
            Source::internal(),
        ));

        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, DiagnosticFlags::default());
        let mut handler = RecordingHandler::default();

        for id in [implicit, empty, alias] {
            do_decl(&unit, id, &mut handler, &diagnostics);
        }

        assert!(handler.routed.is_empty());
    }
}
