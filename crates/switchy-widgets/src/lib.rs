//! Animated toggle-switch widgets.
//!
//! Every switch is controlled: it renders the `checked` value it was given and
//! reports activations through its change callback without flipping itself.
//! Hoist the value into a [`SwitchState`] and wrap the switch in [`Bound`] to
//! get the usual click-to-toggle loop.
//!
//! | Widget | Look |
//! |---|---|
//! | [`ISwitch`] | pill track with a sliding white thumb |
//! | [`IconISwitch`] | pill with a check/cross icon on the thumb |
//! | [`CustomISwitch`] | pill with arbitrary thumb content |
//! | [`ColoredSwitch`] | half-width colored block |
//! | [`SquareSwitch`] | square block over a thin bar |
//! | [`TextSwitch`] | block over two text labels |
//! | [`CustomSwitch`] | block over arbitrary content |
//! | [`HeartSwitch`] | heart outline with a thumb following its curve |
//! | [`MorphingSwitch`] | pulsing, shape-morphing track |
//! | [`NativeSwitch`] | the platform's own control |

pub mod block;
pub mod colored;
pub mod content;
pub mod custom_iswitch;
pub mod custom_switch;
pub mod heart;
pub mod icon_iswitch;
pub mod iswitch;
#[cfg(feature = "legacy")]
pub mod legacy;
pub mod morphing;
#[cfg(feature = "native")]
pub mod native;
pub mod palette;
pub mod square;
pub mod state;
mod switch;
pub mod text_switch;
pub mod thumb;
pub mod toggleable;

pub use colored::ColoredSwitch;
pub use content::{ContentPainter, Icon, SwitchContent};
pub use custom_iswitch::CustomISwitch;
pub use custom_switch::CustomSwitch;
pub use heart::HeartSwitch;
pub use icon_iswitch::IconISwitch;
pub use iswitch::ISwitch;
pub use morphing::MorphingSwitch;
#[cfg(feature = "native")]
pub use native::{NativeControl, NativePlatform, NativeSwitch};
pub use palette::{ColorModel, StateColors};
pub use square::SquareSwitch;
pub use state::{Bound, SwitchState};
pub use switch::Switch;
pub use text_switch::TextSwitch;
pub use toggleable::{OnCheckedChange, PressTracker, SwitchToggled, Toggleable};
