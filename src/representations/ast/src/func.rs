use source_files::Source;

#[derive(Clone, Debug)]
pub struct FuncDecl {
    pub name: String,
    pub attrs: FuncAttrs,

    /// Whether this declaration has a body, as opposed to being a prototype.
    pub is_definition: bool,
}

impl FuncDecl {
    pub fn is_prototype(&self) -> bool {
        !self.is_definition
    }
}

#[derive(Clone, Debug, Default)]
pub struct FuncAttrs {
    /// The `[shader("...")]` attribute, if present. The stage name is kept
    /// as written; it is decoded during scheduling so that unknown names
    /// can be reported against their source location.
    pub stage: Option<StageAttr>,

    /// Whether the function carries an `export` marker.
    pub export: bool,
}

#[derive(Clone, Debug)]
pub struct StageAttr {
    pub stage_name: String,
    pub source: Source,
}
