//! Compile-time content tables for the portfolio page.
//!
//! Everything here is fixed at build time: the five page sections, the skill
//! and project listings, and the owner's profile. Nothing in this crate is
//! mutable; display order is declaration order.

pub mod catalog;
pub mod profile;
pub mod section;
pub mod site;

pub use catalog::{Project, Skill, PROJECTS, SKILLS};
pub use profile::{Highlight, Profile, ProfileLink, PROFILE};
pub use section::SectionId;
pub use site::Site;
