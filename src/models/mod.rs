// Model module exports

pub mod settings;
pub mod sound;
pub mod timer;
