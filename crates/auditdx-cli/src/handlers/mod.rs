pub mod menu;
pub mod quick;
pub mod run;
