pub mod bucket;
pub mod trip;
