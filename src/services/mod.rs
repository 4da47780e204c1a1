// Service module exports

pub mod audio;
pub mod countdown;
pub mod notification;
pub mod settings;
