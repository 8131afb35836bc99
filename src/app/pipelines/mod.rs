pub mod corpus_pipeline;
