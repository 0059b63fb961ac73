pub mod mappers;
pub mod uploads;
