//! Resource accessors
//!
//! Each accessor is a thin facade over one bridge resource category. It is
//! constructed lazily by the owning [`Client`](crate::Client), holds a
//! handle back to it, and expresses every operation as one or more commands
//! delegated through `invoke_command`.

mod bridge;
mod groups;
mod lights;
mod scenes;
mod schedules;
mod sensors;
mod time_zones;
mod users;

pub use bridge::Bridge;
pub use groups::Groups;
pub use lights::Lights;
pub use scenes::Scenes;
pub use schedules::Schedules;
pub use sensors::Sensors;
pub use time_zones::TimeZones;
pub use users::Users;
