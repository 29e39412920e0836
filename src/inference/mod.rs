pub mod enumerate;
pub mod evolution;
pub mod input;

pub use enumerate::{attach_ranks, candidate_ivs, enumerate_candidates, CandidateResult};
pub use evolution::{rank_family_member, EvolutionBracketRank, EvolutionRankEntry};
pub use input::{InvestmentTier, IvComponent, ObservedInput, HIGH_IV_FLOOR, RESET_IV_FLOOR};
