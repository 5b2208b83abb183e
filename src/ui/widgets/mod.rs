pub mod inbox;
pub mod recipients;
