pub use crate::comparison::{rank_by_range, RangeComparison};
pub use crate::error::{ReadError, VehicleError};
pub use crate::reader::{parse_vehicle_spec, read_vehicle, VehicleReader};
pub use crate::traits::SerdeAPI;
pub use crate::vehicle::{Fleet, Vehicle, VehicleKind};
