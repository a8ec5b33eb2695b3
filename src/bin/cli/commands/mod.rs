pub mod cards;
pub mod chat;
pub mod flash;
pub mod pomodoro;
pub mod quiz;
pub mod review;
pub mod sql;
pub mod stats;
pub mod tasks;
