pub mod category;
pub mod definition;
pub mod demographics;
pub mod event;
pub mod result;

pub use category::{Category, MAX_EVENT_POINTS, MIN_EVENT_POINTS, MIN_TOTAL_POINTS};
pub use definition::{Breakpoint, EventDefinition};
pub use demographics::{AgeGroup, Gender, parse_demographics};
pub use event::{Direction, EventId, EventInfo, InputRange, Unit};
pub use result::{EventScore, RawScores, TestResult};
