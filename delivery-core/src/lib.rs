pub mod clock;
pub mod evaluator;
pub mod schedule;
pub mod settings;

pub use clock::{Clock, FixedClock, SystemClock};
pub use evaluator::{aggregate, evaluate, DeliveryOutcome};
pub use schedule::BlackoutWindow;
pub use settings::{load_blackout_window, ConfigError, ConfigProvider};
