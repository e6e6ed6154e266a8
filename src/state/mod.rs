pub mod cursor;
pub mod fill;
pub mod session;
pub mod timer;
pub mod validation;

pub use cursor::{Cursor, Navigator};
pub use fill::FillState;
pub use session::{Command, Session, SessionEvent};
pub use timer::Timer;
pub use validation::{CellStatus, CompletionFlags, SlotCheck, Tally, Verdict};
