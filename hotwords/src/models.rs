// src/models.rs
pub mod count_word;
pub mod word_count;

pub use self::count_word::CountWord;
pub use self::word_count::WordCount;
