use thiserror::Error;

/// Failures raised while loading inputs or building the comparison scene.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("invalid graph JSON: {0}")]
    GraphFormat(String),
    #[error("invalid mapping table: {0}")]
    MappingFormat(#[from] csv::Error),
    #[error("inconsistent mapping: {0}")]
    InconsistentMapping(MappingIssue),
    #[error("invalid {what} range {min}..{max}: expected finite bounds with 0 <= min <= max")]
    InvalidRange { what: &'static str, min: f32, max: f32 },
    #[error("unknown palette {0:?}")]
    UnknownPalette(String),
    #[error("cannot parse color {0:?}")]
    InvalidColor(String),
}

/// The specific way a mapping disagrees with the graphs it links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MappingIssue {
    FineNodeUnmapped(String),
    FineNodeNotInGraph(String),
    CoarseNodeNotInGraph(String),
    CoarseNodeWithoutMembers(String),
}

impl std::fmt::Display for MappingIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FineNodeUnmapped(id) => {
                write!(f, "fine node {id:?} has no coarse node assigned")
            }
            Self::FineNodeNotInGraph(id) => {
                write!(f, "mapped fine node {id:?} is not part of the fine graph")
            }
            Self::CoarseNodeNotInGraph(id) => {
                write!(f, "coarse node {id:?} is not part of the coarse graph")
            }
            Self::CoarseNodeWithoutMembers(id) => {
                write!(f, "coarse node {id:?} has no fine nodes mapped to it")
            }
        }
    }
}

impl VizError {
    pub(crate) fn mapping(issue: MappingIssue) -> Self {
        Self::InconsistentMapping(issue)
    }
}

pub type Result<T, E = VizError> = std::result::Result<T, E>;
