//! Schema layer: value data entities and the fixed category catalogue

pub mod categories;
pub mod types;

pub use categories::{category, Category, CATEGORIES};
pub use types::{
    answer_id, now_millis, palette_color, Answer, Group, Insight, UserData,
    ANSWERS_PER_CATEGORY, CATEGORY_COUNT, PALETTE, PURPOSE_INDEX,
};
