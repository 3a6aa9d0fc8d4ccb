//! FlagForge Core - Flag Template Compiler
//!
//! # The Ground Rules
//! 1. SVG Is Truth
//! 2. Layers Paint In A Fixed Order
//! 3. Validation Is Protective (errors block, warnings advise)
//! 4. Palette Colors Are Consumed In Paint Order
//! 5. Manifests Enable Reproduction

pub mod canvas;
pub mod collection;
pub mod colors;
pub mod composition;
pub mod elements;
pub mod hashing;
pub mod pipeline;
pub mod request;
pub mod validation;

pub use canvas::{Canvas, CanvasError};
pub use collection::ElementCollection;
pub use colors::{ColorError, ColorSequencer, HexColor};
pub use composition::{Composition, LayerKind};
pub use elements::{
    BarLayout, BarLayoutError, Bars, Canton, Circle, Cross, FlagElement, Moon, Orientation, Rect,
    Side, SidePosition, Star, Triangle,
};
pub use hashing::{canonical_json, compute_job_hash, compute_manifest_hash};
pub use pipeline::{CompiledFlag, FlagPipeline, PipelineError};
pub use request::{FlagRequest, RequestError};
pub use validation::{ValidationReport, ValidationViolation, ViolationSeverity};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
