//! Dependency Inversion Principle
//!
//! High-level code should depend on abstractions, not on concrete low-level
//! types. [`RecommendationEngineV1`] builds a
//! [`GenreBasedRecommendationEngineV1`] itself and can never use anything
//! else. [`RecommendationEngineV2`] is handed any [`RecommendationEngine`]
//! when it is constructed.

use std::io::Write;

use crate::context::DemoContext;
use crate::error::Result;
use crate::principles::Principle;

/// Recommends from the user's preferred genres.
#[derive(Debug, Default)]
pub struct GenreBasedRecommendationEngineV1;

impl GenreBasedRecommendationEngineV1 {
    /// Produce recommendations.
    pub fn get_recommendations(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Generating recommendations based on user's preferred genres...")?;
        Ok(())
    }
}

/// Recommends from recently added movies.
#[derive(Debug, Default)]
pub struct RecentlyAddedRecommendationEngineV1;

impl RecentlyAddedRecommendationEngineV1 {
    /// Produce recommendations.
    pub fn get_recommendations(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Generating recommendations based on recently added movies...")?;
        Ok(())
    }
}

/// High-level engine welded to the genre-based implementation.
#[derive(Debug, Default)]
pub struct RecommendationEngineV1 {
    recommender: GenreBasedRecommendationEngineV1,
}

impl RecommendationEngineV1 {
    /// Create the engine along with its hard-wired recommender.
    pub fn new() -> Self {
        Self {
            recommender: GenreBasedRecommendationEngineV1,
        }
    }

    /// Recommend movies.
    pub fn recommend(&self, out: &mut dyn Write) -> Result<()> {
        self.recommender.get_recommendations(out)
    }
}

/// Source of movie recommendations.
pub trait RecommendationEngine {
    /// Produce recommendations.
    fn get_recommendations(&self, out: &mut dyn Write) -> Result<()>;
}

/// Recommends from the user's preferred genres.
#[derive(Debug, Default)]
pub struct GenreBasedRecommendationEngineV2;

impl RecommendationEngine for GenreBasedRecommendationEngineV2 {
    fn get_recommendations(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Generating recommendations based on user's preferred genres...")?;
        Ok(())
    }
}

/// Recommends from recently added movies.
#[derive(Debug, Default)]
pub struct RecentlyAddedRecommendationEngineV2;

impl RecommendationEngine for RecentlyAddedRecommendationEngineV2 {
    fn get_recommendations(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Generating recommendations based on recently added movies...")?;
        Ok(())
    }
}

/// High-level engine that only knows the [`RecommendationEngine`] trait.
pub struct RecommendationEngineV2 {
    recommender: Box<dyn RecommendationEngine>,
}

impl RecommendationEngineV2 {
    /// Create the engine around an injected recommender.
    pub fn new(recommender: Box<dyn RecommendationEngine>) -> Self {
        Self { recommender }
    }

    /// Recommend movies.
    pub fn recommend(&self, out: &mut dyn Write) -> Result<()> {
        self.recommender.get_recommendations(out)
    }
}

/// Run the DIP demonstration.
pub fn run(_ctx: &DemoContext, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", Principle::Dip.title())?;

    RecommendationEngineV1::new().recommend(out)?;

    RecommendationEngineV2::new(Box::new(GenreBasedRecommendationEngineV2)).recommend(out)?;
    RecommendationEngineV2::new(Box::new(RecentlyAddedRecommendationEngineV2)).recommend(out)?;
    Ok(())
}
