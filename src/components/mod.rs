mod arrivals;
mod clock;
mod panel;
pub mod topology;
mod weather;

pub use arrivals::ArrivalsPanel;
pub use clock::ClockPanel;
pub use panel::{Panel, PanelDensity};
pub use topology::TopologyPanel;
pub use weather::WeatherPanel;
