// Lookup core module
// The request-to-response mapping layer: each operation validates its input,
// consults a static table or the market data provider, and folds the outcome
// into the response envelope.

mod city;
mod envelope;
mod lodging;
mod stock;
mod time;
mod weather;

// Re-export public types
pub use envelope::{Envelope, Report};
pub use lodging::{find_listings, Listing, ListingResults};
pub use stock::{stock_price, StockQuote};
pub use time::current_time;
pub use weather::current_weather;
