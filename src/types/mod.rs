pub mod chart_spec;
pub mod daily_record;
pub mod display_options;
pub mod fields;
pub mod yearly_aggregate;
