//! # Hyperview
//!
//! Linear algebra for drawing objects of any dimension on a flat screen.
//!
//! One `use hyperview::prelude::*;` gives you matrices, transform
//! constructors, the LU/QR solver and the rotation-plane configuration.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrices, transforms, decompositions |
//! | `serde` | `Serialize`/`Deserialize` for matrices and plane angles |

pub use hyperview_core as core;

/// Glob-import convenience: `use hyperview::prelude::*;`
pub mod prelude {
    pub use hyperview_core::prelude::*;
}
