pub mod likes;
pub mod oembed;
