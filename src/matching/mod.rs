// Title matching — normalization, keyword extraction, and similarity scoring.

pub mod keywords;
pub mod matcher;
pub mod normalize;
pub mod similarity;
pub mod suggest;
