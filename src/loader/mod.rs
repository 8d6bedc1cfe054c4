pub mod pad_collector;
pub mod pad_discovery;
pub mod scan;
