//! Placement math for the tattoo previewer.
//!
//! This crate provides pure synchronous geometry functions for fitting a
//! loaded 3D asset into the viewing volume and placing a tattoo decal on a
//! body zone. All functions are plain computations over their arguments -
//! the rendering layer owns the scene graph and applies the results.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Stateless**: Every operation is a pure function
//! - **Web-compatible**: Compiles to WASM
//!
//! # Key functions
//!
//! - [`normalize`]: Fit an asset's bounding box into the viewing volume
//! - [`lookup_zone`]: Resolve a body zone to its placement transform
//! - [`compute_decal_spec`]: Derive the final decal transform from a zone
//!   and the user's scale factor

mod error;

pub mod bounds;
pub mod decal;
pub mod normalize;
pub mod zones;

pub use bounds::Aabb;
pub use decal::{DecalSpec, SCALE_RANGE, compute_decal_spec};
pub use error::{NormalizeError, NormalizeResult};
pub use normalize::{BODY_TARGET_SIZE, NormalizeTransform, PIECE_TARGET_SIZE, normalize};
pub use zones::{ZoneId, ZoneTransform, lookup_zone};
