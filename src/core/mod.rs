// Core pairing logic exports
pub mod normalize;
pub mod random;
pub mod rules;
pub mod selector;

pub use normalize::ingredient_list;
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use rules::{CandidateGroup, PairingRule, RuleKind, CANDIDATE_GROUPS, DEFAULT_PAIRINGS, FILLER_INGREDIENTS, MAX_PAIRINGS};
pub use selector::PairingSelector;
