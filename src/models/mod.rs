pub mod match_report;
pub mod player;
pub mod response;
pub mod schema;
