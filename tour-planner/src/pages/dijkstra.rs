use tour_platform::SessionStorage;
use tracing::warn;

/// Session storage key holding the tour stops as a JSON array of names.
pub const TOUR_STOPS_KEY: &str = "tourStops";

/// Route map page; only reads the stops handed over by the tour plan.
pub struct DijkstraPage {
    /// Stops in visiting order.
    pub stops: Vec<String>,
}

impl DijkstraPage {
    pub(crate) fn load(storage: &SessionStorage) -> Self {
        let stops = match storage.get_json::<Vec<String>>(TOUR_STOPS_KEY) {
            Ok(stops) => stops.unwrap_or_default(),
            Err(err) => {
                warn!("ignoring stored tour stops: {err}");
                Vec::new()
            }
        };
        Self { stops }
    }
}
