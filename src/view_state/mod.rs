//! View-state layer - layout signals and animation sequencing
//!
//! Derives layout and animation decisions from continuous external signals
//! (viewport size, scroll position, pointer position, element visibility)
//! and drives time-ordered effects. Nothing here touches the terminal.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (Timestamp, ViewportSize, PointerPosition, DeviceClass, Span)
//! - `timer`: Scheduler / TimerHandle - cancellable timers on a cooperative clock
//! - `signal`: Observable / ReadSignal - single-writer broadcast values
//! - `viewport`: ViewportMonitor - device class and pointer tracking
//! - `scroll_progress`: ScrollProgressTracker - clamped progress through a region
//! - `visibility`: VisibilityGate - one-shot reveal latch
//! - `sequencer`: AnimationSequencer - staggered Pending → Animating → Settled
//! - `typewriter`: TypewriterEngine - character-by-character reveal
//! - `submission`: SubmissionSimulator - contact form lifecycle

pub mod scroll_progress;
pub mod sequencer;
pub mod signal;
pub mod submission;
pub mod timer;
pub mod types;
pub mod typewriter;
pub mod viewport;
pub mod visibility;

pub use scroll_progress::{ParallaxRange, ScrollProgress, ScrollProgressTracker, ScrollRegion};
pub use sequencer::{AnimationSequencer, ItemPhase, SequenceItem, SequenceSpec};
pub use signal::{Observable, ReadSignal, Subscription};
pub use submission::{
    Ack, ContactFields, ContactTransport, SimulatedTransport, SubmissionSimulator,
    SubmissionState, SubmitOutcome,
};
pub use timer::{Scheduler, TimerHandle, TimerId};
pub use types::{Breakpoints, DeviceClass, PointerPosition, Span, Timestamp, ViewportSize};
pub use typewriter::TypewriterEngine;
pub use viewport::{ViewportChange, ViewportMonitor};
pub use visibility::{Revealed, VisibilityGate};
