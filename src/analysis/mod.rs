pub mod deck_stats;
pub mod group_pairwise;
pub mod group_stats;
pub mod match_matrix;
pub mod numeric;
pub mod progress;
pub mod recommender;
pub mod report;
pub mod set_house;
pub mod trend;
