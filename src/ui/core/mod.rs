//! Widget protocol, child slots and the value types every widget shares.

pub mod geom;
pub mod id;
pub mod kid;
pub mod layout;
pub mod painter;
pub mod style;
pub mod text;
pub mod theme;
pub mod widget;

pub use geom::{Pos, Rect, Size};
pub use id::Id;
pub use kid::{Kid, Slot, State};
pub use painter::{PaintCmd, Painter};
pub use widget::{Env, EventResult, KidsUpdate, Notice, NoticeKind, Update, Widget};
