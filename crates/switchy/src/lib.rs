//! switchy: animated toggle-switch widgets.
//!
//! Re-exports the runtime from `switchy-core` at the root and the widget
//! catalogue under [`widgets`] (its main types are also re-exported here).
//!
//! ```
//! use switchy::{Bound, ISwitch, Switch, SwitchState};
//!
//! let state = SwitchState::new(false);
//! let switch = Bound::new(ISwitch::new(true).test_id("wifi"), state.clone());
//! assert!(!switch.is_checked());
//! ```

pub mod logging;

pub use switchy_core::*;
pub use switchy_widgets as widgets;

#[cfg(feature = "native")]
pub use switchy_widgets::NativeSwitch;
pub use switchy_widgets::{
    Bound, ColoredSwitch, CustomISwitch, CustomSwitch, HeartSwitch, ISwitch, Icon, IconISwitch,
    MorphingSwitch, SquareSwitch, StateColors, Switch, SwitchContent, SwitchState, SwitchToggled,
    TextSwitch,
};
