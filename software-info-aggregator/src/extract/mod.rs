//! Field extraction.
//!
//! Three independent extractors produce the partial records merged into a
//! summary row: basic repository info (always present), package info
//! (manifest plus download statistics) and citation info (DOI badges from
//! the README). Absence of a manifest or README is never an error.

mod basic;
mod citation;
mod package;

pub use basic::{basic_info, BasicInfo};
pub use citation::{citation_info, find_citation_badges};
pub use package::{find_package_name, package_info, NameMatch, PackageInfo};
