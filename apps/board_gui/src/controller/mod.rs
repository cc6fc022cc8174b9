//! Controller layer: UI events, reducer-like state transitions, and the queue
//! that carries events from widgets to the reducer.

pub mod events;
pub mod orchestration;
pub mod reducer;
