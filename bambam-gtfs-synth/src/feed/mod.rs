mod agency;
mod feed_writer;
mod frequency;
pub mod gtfs_codec;
mod route;
mod service_calendar;
mod stop;
mod stop_time;
mod synthetic_feed;
mod trip;

pub use agency::Agency;
pub use feed_writer::{write_feed, FeedWriteError};
pub use frequency::Frequency;
pub use route::Route;
pub use service_calendar::ServiceCalendar;
pub use stop::Stop;
pub use stop_time::StopTime;
pub use synthetic_feed::SyntheticFeed;
pub use trip::Trip;
