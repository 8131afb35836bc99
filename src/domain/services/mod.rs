pub mod corpus;
pub mod frequency;
pub mod repetition;
pub mod themes;
pub mod tokenizer;
pub mod unicode;
