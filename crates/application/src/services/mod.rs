mod record_builder;

pub use record_builder::build_record;
