mod config;
mod plugin;
mod scenario;
mod stability;
