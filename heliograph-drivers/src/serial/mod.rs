//! Serial-port adapters

pub mod notice;

pub use notice::NoticeWriter;
