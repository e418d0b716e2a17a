mod model;
mod stage_kind;

pub use model::ShaderModel;
pub use stage_kind::StageKind;
