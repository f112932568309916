pub mod classify;
pub mod quantize;
pub mod report;
pub mod schedule;
