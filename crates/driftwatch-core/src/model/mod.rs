pub mod canonical;
pub mod collection;
pub mod raw;

pub use canonical::{
    CanonicalArtifact, ContentSetRef, MetaEntry, ParameterSpec, PlatformQuery, SubcolumnSpec,
};
pub use collection::ArtifactSet;
pub use raw::{RawArtifact, SourceShape, RESERVED_CATEGORY};
