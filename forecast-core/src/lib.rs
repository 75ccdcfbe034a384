//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client, its wire DTOs and the DTO -> domain mappers
//! - A repository that classifies failures, and the use cases on top of it
//! - View-models holding UI state for the search and detail screens
//!
//! It is used by `forecast-cli`, but can also be reused by other front ends.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod mapper;
pub mod model;
pub mod navigation;
pub mod repository;
pub mod usecase;
pub mod viewmodel;

pub use app::WeatherApp;
pub use config::Config;
pub use error::{ForecastError, RepositoryError};
pub use model::{CurrentWeather, ForecastDay, Location, WeatherForecast};
pub use navigation::{NavStack, Route};
pub use repository::WeatherRepository;
