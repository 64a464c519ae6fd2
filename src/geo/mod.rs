//! Company address lookup (OpenStreetMap Nominatim) and driving time
//! (OpenRouteService).

pub mod nominatim;
pub mod route;

pub use nominatim::{NominatimClient, build_address_query};
pub use route::{RouteClient, TravelTime};
