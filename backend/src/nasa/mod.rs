mod client;
mod error;

pub use client::{Coordinates, EarthImagery, MarsPhotosPage, NasaClient};
pub use error::NasaError;
