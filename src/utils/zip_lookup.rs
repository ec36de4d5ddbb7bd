use std::{
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use anyhow::Context;
use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::utils::debounce::Debouncer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    #[schema(example = "Springfield")]
    pub city: String,
    #[schema(example = "IL")]
    pub state: String,
}

/// Quiet period after the last keystroke before a ZIP code is looked up.
pub const ZIP_DEBOUNCE: Duration = Duration::from_millis(500);

/// Exactly five ASCII digits.
pub fn is_zip(value: &str) -> bool {
    value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Resolves a US ZIP code to a city and state. `Ok(None)` means the code is
/// unknown.
pub trait ZipResolver: Send + Sync + 'static {
    fn resolve<'a>(&'a self, zip: &'a str) -> BoxFuture<'a, anyhow::Result<Option<Place>>>;
}

#[derive(Deserialize)]
struct ZippopotamResponse {
    places: Vec<ZippopotamPlace>,
}

#[derive(Deserialize)]
struct ZippopotamPlace {
    #[serde(rename = "place name")]
    place_name: String,
    #[serde(rename = "state abbreviation")]
    state_abbreviation: String,
}

/// Client for a zippopotam.us compatible service (`GET {base}/{zip}`).
#[derive(Clone)]
pub struct HttpZipResolver {
    client: Client,
    base_url: String,
}

impl HttpZipResolver {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl ZipResolver for HttpZipResolver {
    fn resolve<'a>(&'a self, zip: &'a str) -> BoxFuture<'a, anyhow::Result<Option<Place>>> {
        Box::pin(async move {
            let url = format!("{}/{}", self.base_url, zip);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .with_context(|| format!("requesting {}", url))?;

            if response.status() == StatusCode::NOT_FOUND {
                return Ok(None);
            }

            let body: ZippopotamResponse = response
                .error_for_status()?
                .json()
                .await
                .context("decoding ZIP lookup response")?;

            Ok(body.places.into_iter().next().map(|p| Place {
                city: p.place_name,
                state: p.state_abbreviation,
            }))
        })
    }
}

#[derive(Default)]
struct Latest {
    /// Bumped on every accepted input; a lookup only publishes if its
    /// generation is still current.
    generation: AtomicU64,
    place: Mutex<Option<Place>>,
    input: Mutex<Option<String>>,
}

/// Debounced ZIP-to-place lookup for an address form. Only the result for
/// the most recent settled input is kept; failures leave `None`.
pub struct ZipLookup {
    debouncer: Debouncer<(u64, String)>,
    latest: Arc<Latest>,
}

impl ZipLookup {
    pub fn new(resolver: Arc<dyn ZipResolver>, delay: Duration) -> Self {
        let latest = Arc::new(Latest::default());
        let shared = Arc::clone(&latest);

        let debouncer = Debouncer::new(delay, move |(generation, zip): (u64, String)| {
            let resolver = Arc::clone(&resolver);
            let latest = Arc::clone(&shared);
            async move {
                let place = match resolver.resolve(&zip).await {
                    Ok(place) => place,
                    Err(e) => {
                        debug!(error = %e, zip = %zip, "ZIP lookup failed");
                        None
                    }
                };

                if latest.generation.load(Ordering::SeqCst) == generation {
                    *latest.place.lock().unwrap_or_else(PoisonError::into_inner) = place;
                }
            }
        });

        Self { debouncer, latest }
    }

    /// Feeds the current field value. Anything that is not a ZIP cancels a
    /// pending lookup; repeating the previous value is a no-op.
    pub fn input(&self, value: &str) {
        let value = value.trim();
        let mut last = self.latest.input.lock().unwrap_or_else(PoisonError::into_inner);
        if last.as_deref() == Some(value) {
            return;
        }
        *last = Some(value.to_string());

        let generation = self.latest.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if is_zip(value) {
            self.debouncer.push((generation, value.to_string()));
        } else {
            self.debouncer.cancel();
        }
    }

    /// True while a lookup is waiting out the debounce window or in flight.
    pub fn is_loading(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn place(&self) -> Option<Place> {
        self.latest
            .place
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
