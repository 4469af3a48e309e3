mod common;
mod intake;
mod risk;
mod service;
