pub mod batch;
pub mod notification;
pub mod response;
pub mod single;
