use derive_more::IsVariant;
use std::fmt::Display;

// NOTE: The discriminant order is significant: the ray tracing stages
// RayGeneration..=Callable must stay contiguous for `is_ray`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum StageKind {
    Pixel,
    Vertex,
    Geometry,
    Hull,
    Domain,
    Compute,
    Library,
    RayGeneration,
    Intersection,
    AnyHit,
    ClosestHit,
    Miss,
    Callable,
    Mesh,
    Amplification,
    Invalid,
}

impl StageKind {
    /// Decodes the stage name used by `[shader("...")]` attributes.
    ///
    /// The match is exact; unknown names yield `None` so that callers can
    /// report them instead of defaulting.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shader_model::StageKind;
    /// assert_eq!(StageKind::from_attr_name("vertex"), Some(StageKind::Vertex));
    /// assert_eq!(StageKind::from_attr_name("tesselation"), None);
    /// ```
    pub fn from_attr_name(name: &str) -> Option<Self> {
        Some(match name {
            "pixel" => Self::Pixel,
            "vertex" => Self::Vertex,
            "geometry" => Self::Geometry,
            "hull" => Self::Hull,
            "domain" => Self::Domain,
            "compute" => Self::Compute,
            "raygeneration" => Self::RayGeneration,
            "intersection" => Self::Intersection,
            "anyhit" => Self::AnyHit,
            "closesthit" => Self::ClosestHit,
            "miss" => Self::Miss,
            "callable" => Self::Callable,
            "mesh" => Self::Mesh,
            "amplification" => Self::Amplification,
            _ => return None,
        })
    }

    /// Whether this is one of the ray tracing stages.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shader_model::StageKind;
    /// assert!(StageKind::AnyHit.is_ray());
    /// assert!(!StageKind::Compute.is_ray());
    /// ```
    pub fn is_ray(self) -> bool {
        self >= Self::RayGeneration && self <= Self::Callable
    }
}

impl Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Pixel => "pixel",
            Self::Vertex => "vertex",
            Self::Geometry => "geometry",
            Self::Hull => "hull",
            Self::Domain => "domain",
            Self::Compute => "compute",
            Self::Library => "library",
            Self::RayGeneration => "raygeneration",
            Self::Intersection => "intersection",
            Self::AnyHit => "anyhit",
            Self::ClosestHit => "closesthit",
            Self::Miss => "miss",
            Self::Callable => "callable",
            Self::Mesh => "mesh",
            Self::Amplification => "amplification",
            Self::Invalid => "invalid",
        })
    }
}
