mod accra;

pub use accra::sample_schedule;
