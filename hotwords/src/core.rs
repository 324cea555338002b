// src/core.rs
pub mod aggregate;
pub mod pipeline;
pub mod rank;
pub mod staging;
pub mod stopwords;
pub mod tokenize;
pub mod topk;
