extern crate alloc;

pub mod adapters;
pub mod app;
pub mod classics;
pub mod config;
mod constructors;
pub mod controllers;
pub mod entities;
pub mod filters;
pub mod i18n;
pub mod interactors;
pub mod karka;
pub mod repositories;
pub mod seed;
pub mod usecases;
pub(crate) mod utils;

pub use constructors::*;
