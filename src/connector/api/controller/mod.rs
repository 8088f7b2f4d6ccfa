pub mod ask_controller;
pub mod probe_controller;
