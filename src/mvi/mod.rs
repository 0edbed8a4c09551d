//! Model-View-Intent (MVI) primitives shared by the game core and the UI.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data the view renders from
//! - **Intent**: user actions, timer events, configuration changes
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Side effects (scheduling timers, ringing the bell, talking to the engine)
//! live around the dispatch call, never inside a reducer.

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub(crate) use dispatch_mvi;

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
