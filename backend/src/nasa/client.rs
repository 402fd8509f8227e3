//! Outbound HTTP calls against the NASA Open APIs

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use super::error::NasaError;

/// Timeout applied to every outbound call
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Rover photo pages are truncated to this many entries
const MAX_ROVER_PHOTOS: usize = 12;

// Fixed error labels, one per operation
const APOD_ERROR: &str = "Failed to fetch Astronomy Picture of the Day";
const MARS_PHOTOS_ERROR: &str = "Failed to fetch Mars Rover photos";
const NEO_ERROR: &str = "Failed to fetch Near Earth Objects";
const EARTH_IMAGERY_ERROR: &str = "Failed to fetch Earth imagery";
const ROVERS_ERROR: &str = "Failed to fetch rovers information";

/// Truncated page of Mars rover photos
#[derive(Debug, Serialize)]
pub struct MarsPhotosPage {
    /// Truncated upstream photo list, at most 12 entries
    pub photos: Vec<Value>,
    /// Echoed rover name
    pub rover: String,
    /// Echoed Martian day
    pub sol: u32,
    /// Untruncated upstream photo count
    pub total: usize,
}

/// Resolved Earth imagery tile
#[derive(Debug, Serialize)]
pub struct EarthImagery {
    /// Final resolved location of the outbound request
    pub url: String,
    /// Echoed query coordinates
    pub coordinates: Coordinates,
    /// Echoed acquisition date
    pub date: String,
    /// Echoed tile width/height in decimal degrees
    pub dimension: f64,
}

/// Decimal-degree coordinate pair
#[derive(Debug, Serialize)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

/// Client for NASA's Open APIs.
///
/// Constructed once at startup and shared across requests. The credential is
/// attached as the `api_key` query parameter on every call; every failure
/// (transport, non-2xx status, malformed body) is normalized into a
/// [`NasaError`] carrying the operation's fixed label, so callers never see
/// a raw transport error. No call is retried.
#[derive(Debug, Clone)]
pub struct NasaClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NasaClient {
    /// Creates a client for the given base endpoint and credential
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed
    #[must_use]
    pub fn new(base_url: String, api_key: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(format!("nasa-proxy-backend/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Astronomy Picture of the Day; with `date` omitted the upstream
    /// returns its latest entry
    ///
    /// # Errors
    ///
    /// Returns [`NasaError`] with the daily-image label on any upstream or
    /// transport failure
    pub async fn apod(&self, date: Option<&str>) -> Result<Value, NasaError> {
        let mut query = Vec::new();
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }

        self.get_json("/planetary/apod", &query, APOD_ERROR).await
    }

    /// Photos taken by `rover` on Martian day `sol`, optionally filtered by
    /// camera; the page is truncated to the first 12 entries while `total`
    /// reports the untruncated count
    ///
    /// # Errors
    ///
    /// Returns [`NasaError`] with the Mars-photos label on any upstream or
    /// transport failure
    pub async fn mars_rover_photos(
        &self,
        rover: &str,
        sol: u32,
        camera: Option<&str>,
    ) -> Result<MarsPhotosPage, NasaError> {
        let mut query = vec![("sol", sol.to_string())];
        if let Some(camera) = camera {
            query.push(("camera", camera.to_string()));
        }

        let body = self
            .get_json(
                &format!("/mars-photos/api/v1/rovers/{rover}/photos"),
                &query,
                MARS_PHOTOS_ERROR,
            )
            .await?;

        Ok(page_from_body(body, rover, sol))
    }

    /// Near-earth object feed for the given date range, returned verbatim
    ///
    /// # Errors
    ///
    /// Returns [`NasaError`] with the near-earth-objects label on any
    /// upstream or transport failure
    pub async fn near_earth_objects(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Value, NasaError> {
        let query = vec![
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
        ];

        self.get_json("/neo/rest/v1/feed", &query, NEO_ERROR).await
    }

    /// Earth imagery tile for the given coordinates, date and dimension.
    ///
    /// The upstream responds with the image itself, so the body is never
    /// read; the result carries the final resolved request URL (after any
    /// redirects) plus the echoed query.
    ///
    /// # Errors
    ///
    /// Returns [`NasaError`] with the Earth-imagery label on any upstream or
    /// transport failure
    pub async fn earth_imagery(
        &self,
        lat: f64,
        lon: f64,
        date: &str,
        dim: f64,
    ) -> Result<EarthImagery, NasaError> {
        let query = vec![
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("date", date.to_string()),
            ("dim", dim.to_string()),
        ];

        let response = self
            .send("/planetary/earth/imagery", &query, EARTH_IMAGERY_ERROR)
            .await?;

        Ok(EarthImagery {
            url: response.url().to_string(),
            coordinates: Coordinates { lat, lon },
            date: date.to_string(),
            dimension: dim,
        })
    }

    /// Known rovers and their status metadata, returned verbatim
    ///
    /// # Errors
    ///
    /// Returns [`NasaError`] with the rovers label on any upstream or
    /// transport failure
    pub async fn rovers(&self) -> Result<Value, NasaError> {
        let body = self
            .get_json("/mars-photos/api/v1/rovers", &[], ROVERS_ERROR)
            .await?;

        Ok(body.get("rovers").cloned().unwrap_or_default())
    }

    /// Issues a GET and parses the body as JSON, normalizing malformed
    /// bodies into the operation's labeled error
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        label: &'static str,
    ) -> Result<Value, NasaError> {
        let response = self.send(path, query, label).await?;

        response.json().await.map_err(|err| {
            error!("{label}: invalid upstream body: {err}");
            NasaError::transport(label, &err)
        })
    }

    /// Issues a GET with the credential attached, surfacing transport
    /// failures and non-2xx statuses as labeled errors
    async fn send(
        &self,
        path: &str,
        query: &[(&str, String)],
        label: &'static str,
    ) -> Result<reqwest::Response, NasaError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|err| {
                error!("{label}: {err}");
                NasaError::transport(label, &err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{label}: upstream returned {status}");
            return Err(NasaError::upstream(label, &body));
        }

        Ok(response)
    }
}

/// Reshapes the raw rover-photos body into a truncated page. A body without
/// a `photos` array yields an empty page with `total` 0.
fn page_from_body(mut body: Value, rover: &str, sol: u32) -> MarsPhotosPage {
    let mut photos = match body.get_mut("photos").map(Value::take) {
        Some(Value::Array(photos)) => photos,
        _ => Vec::new(),
    };

    let total = photos.len();
    photos.truncate(MAX_ROVER_PHOTOS);

    MarsPhotosPage {
        photos,
        rover: rover.to_string(),
        sol,
        total,
    }
}
