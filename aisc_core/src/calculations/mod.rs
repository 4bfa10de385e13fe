//! # Member Calculations
//!
//! Member-level strength calculations built on a [`SectionProfile`]:
//!
//! - [`compression`] - Flexural and torsional buckling (Chapter E)
//! - [`flexure`] - Yielding, lateral-torsional and flange local buckling (Chapter F)
//! - [`interaction`] - Combined compression and flexure (H1-1)
//! - [`beam`] - A member over an unbraced length and its full check
//!
//! Each calculator borrows the profile, validates its own inputs at
//! construction and derives everything else on demand. Strengths are grouped
//! into [`StrengthTable`]s whose lowest entry governs.
//!
//! [`SectionProfile`]: crate::section::SectionProfile
//! [`StrengthTable`]: crate::report::StrengthTable

pub mod beam;
pub mod compression;
pub mod flexure;
pub mod interaction;

pub use beam::{Beam, MemberCheck, MemberDemand};
pub use compression::{BeamCompressionEffectiveLength, BucklingRegime, EffectiveLengthFactors};
pub use flexure::{BeamFlexureDoublySymmetric, LateralTorsionZone, MomentDiagram};
pub use interaction::{AxialFlexureInteraction, InteractionEquation, InteractionResult};
