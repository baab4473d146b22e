//! The demonstrations, one module per principle

pub mod basics;
pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::{DemoContext, Result, SolidError};

/// A demonstration in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    /// DRY, KISS and YAGNI
    Basics,
    /// Single Responsibility Principle
    Srp,
    /// Open/Closed Principle
    Ocp,
    /// Liskov Substitution Principle
    Lsp,
    /// Interface Segregation Principle
    Isp,
    /// Dependency Inversion Principle
    Dip,
}

impl Principle {
    /// Every demonstration, in catalog order.
    pub const ALL: [Principle; 6] = [
        Principle::Basics,
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    /// Short name, as accepted on the command line.
    pub fn acronym(self) -> &'static str {
        match self {
            Principle::Basics => "basics",
            Principle::Srp => "srp",
            Principle::Ocp => "ocp",
            Principle::Lsp => "lsp",
            Principle::Isp => "isp",
            Principle::Dip => "dip",
        }
    }

    /// Full name.
    pub fn name(self) -> &'static str {
        match self {
            Principle::Basics => "DRY, KISS and YAGNI",
            Principle::Srp => "Single Responsibility Principle",
            Principle::Ocp => "Open/Closed Principle",
            Principle::Lsp => "Liskov Substitution Principle",
            Principle::Isp => "Interface Segregation Principle",
            Principle::Dip => "Dependency Inversion Principle",
        }
    }

    /// Header line written at the start of the demonstration.
    pub fn title(self) -> &'static str {
        match self {
            Principle::Basics => "Introduction to OOP",
            Principle::Srp => "Single Responsibility Principle (SRP) Example",
            Principle::Ocp => "Open/Closed Principle (OCP) Example",
            Principle::Lsp => "Liskov Substitution Principle (LSP) Example",
            Principle::Isp => "Interface Segregation Principle (ISP) Example",
            Principle::Dip => "Dependency Inversion Principle (DIP) Example",
        }
    }

    /// One-sentence statement of the principle.
    pub fn summary(self) -> &'static str {
        match self {
            Principle::Basics => {
                "Don't repeat yourself, keep it simple, and don't build what nobody uses."
            }
            Principle::Srp => "A type should have only one reason to change.",
            Principle::Ocp => "Types should be open for extension but closed for modification.",
            Principle::Lsp => {
                "An implementation must be usable wherever its trait is expected."
            }
            Principle::Isp => "No type should be forced to implement methods it does not use.",
            Principle::Dip => {
                "High-level code should depend on abstractions, not concrete types."
            }
        }
    }

    /// Whether the demonstration makes a deliberately failing call.
    pub fn has_violation(self) -> bool {
        matches!(self, Principle::Lsp | Principle::Isp)
    }

    /// Run this demonstration, writing its output to `out`.
    pub fn run(self, ctx: &DemoContext, out: &mut dyn Write) -> Result<()> {
        match self {
            Principle::Basics => basics::run(ctx, out),
            Principle::Srp => srp::run(ctx, out),
            Principle::Ocp => ocp::run(ctx, out),
            Principle::Lsp => lsp::run(ctx, out),
            Principle::Isp => isp::run(ctx, out),
            Principle::Dip => dip::run(ctx, out),
        }
    }

    /// Catalog entry for listing.
    pub fn entry(self) -> CatalogEntry {
        CatalogEntry {
            principle: self,
            name: self.name(),
            summary: self.summary(),
            has_violation: self.has_violation(),
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.acronym())
    }
}

impl FromStr for Principle {
    type Err = SolidError;

    /// Accepts the acronym or the full name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Principle::ALL
            .into_iter()
            .find(|p| {
                p.acronym().eq_ignore_ascii_case(wanted) || p.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| SolidError::UnknownPrinciple(s.to_string()))
    }
}

/// A listing row for `solid list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Which demonstration
    pub principle: Principle,
    /// Full name
    pub name: &'static str,
    /// One-sentence statement
    pub summary: &'static str,
    /// Whether it makes a deliberately failing call
    pub has_violation: bool,
}

/// The whole catalog, in order.
pub fn catalog() -> Vec<CatalogEntry> {
    Principle::ALL.into_iter().map(Principle::entry).collect()
}
