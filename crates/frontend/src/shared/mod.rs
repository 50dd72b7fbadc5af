pub mod export;
pub mod notify;
pub mod page_frame;
