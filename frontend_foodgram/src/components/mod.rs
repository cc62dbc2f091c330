pub mod layout;
pub mod meta_tags;
