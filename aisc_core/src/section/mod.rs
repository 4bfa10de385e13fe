//! # Cross-Sections
//!
//! Data flows one way through this module:
//!
//! ```text
//! Dimensions + Material ─► AreaProperties ─► Slenderness ─► SectionProfile
//! ```
//!
//! - [`dimensions`] - Plate dimensions of a doubly-symmetric I-shape
//! - [`area_properties`] - Derived or supplied geometric properties
//! - [`slenderness`] - Table B4.1 classification of flange and web
//! - [`profile`] - The profile consumed by member calculations

pub mod area_properties;
pub mod dimensions;
pub mod profile;
pub mod slenderness;

pub use area_properties::{
    AreaProperties, AreaPropertyValues, DoublySymmetricIAreaProperties, GenericAreaProperties,
    GenericAreaPropertiesBuilder,
};
pub use dimensions::DoublySymmetricIDimensions;
pub use profile::{DoublySymmetricIUserDefined, SectionProfile};
pub use slenderness::{
    AxialElement, AxialSlenderness, ConstructionType, FlexuralElement, FlexuralSlenderness, SectionSlenderness,
};
