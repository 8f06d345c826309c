pub mod dispatch;
pub mod grade;
