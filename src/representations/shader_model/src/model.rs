use crate::StageKind;
use std::fmt::Display;

/// A target shader model resolved from a command line profile string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShaderModel {
    pub kind: StageKind,
    pub major: u32,
    pub minor: u32,
}

impl ShaderModel {
    pub fn new(kind: StageKind, major: u32, minor: u32) -> Self {
        Self { kind, major, minor }
    }

    /// Resolves a profile string such as `"ps_6_0"` or `"lib_6_3"`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shader_model::{ShaderModel, StageKind};
    /// let model = ShaderModel::get_by_name("cs_6_0").unwrap();
    /// assert_eq!(model.kind, StageKind::Compute);
    /// assert_eq!((model.major, model.minor), (6, 0));
    ///
    /// assert!(ShaderModel::get_by_name("xs_6_0").is_none());
    /// ```
    pub fn get_by_name(name: &str) -> Option<Self> {
        let mut parts = name.split('_');

        let kind = match parts.next()? {
            "ps" => StageKind::Pixel,
            "vs" => StageKind::Vertex,
            "gs" => StageKind::Geometry,
            "hs" => StageKind::Hull,
            "ds" => StageKind::Domain,
            "cs" => StageKind::Compute,
            "lib" => StageKind::Library,
            "ms" => StageKind::Mesh,
            "as" => StageKind::Amplification,
            _ => return None,
        };

        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;

        parts.next().is_none().then_some(Self { kind, major, minor })
    }
}

impl Display for ShaderModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Ray tracing stages have no standalone profile prefix; spell out
        // the stage name for those.
        let prefix = match self.kind {
            StageKind::Pixel => "ps",
            StageKind::Vertex => "vs",
            StageKind::Geometry => "gs",
            StageKind::Hull => "hs",
            StageKind::Domain => "ds",
            StageKind::Compute => "cs",
            StageKind::Library => "lib",
            StageKind::Mesh => "ms",
            StageKind::Amplification => "as",
            _ => return write!(f, "{}_{}_{}", self.kind, self.major, self.minor),
        };

        write!(f, "{}_{}_{}", prefix, self.major, self.minor)
    }
}
