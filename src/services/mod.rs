pub mod blog;
pub mod dates;
pub mod likes;
pub mod listing;
pub mod reading;
pub mod share;
pub mod slug;
pub mod status;
pub mod team;
pub mod toc;
