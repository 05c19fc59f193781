//! Viewport monitor: device class and pointer position.
//!
//! One monitor per application, owned by the root composition and shared
//! with sections through read-only signals.

use super::signal::{Observable, ReadSignal, Subscription};
use super::types::{Breakpoints, DeviceClass, PointerPosition, ViewportSize};
use tracing::{debug, info};

/// Outcome of a resize signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportChange {
    /// Device class before the resize.
    pub previous: DeviceClass,
    /// Device class after the resize.
    pub current: DeviceClass,
    /// New viewport size.
    pub size: ViewportSize,
}

impl ViewportChange {
    /// Whether the resize crossed a breakpoint.
    pub fn class_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Tracks viewport size and pointer position, classifies the device.
///
/// Notifications are synchronous and undebounced: every resize and every
/// pointer move is forwarded to subscribers as it arrives.
#[derive(Debug)]
pub struct ViewportMonitor {
    breakpoints: Breakpoints,
    size: Observable<ViewportSize>,
    device_class: Observable<DeviceClass>,
    pointer: Observable<PointerPosition>,
}

impl ViewportMonitor {
    /// Sample the initial viewport state once.
    pub fn new(size: ViewportSize, pointer: PointerPosition, breakpoints: Breakpoints) -> Self {
        let class = DeviceClass::classify(size.width, breakpoints);
        debug!(?size, ?class, "viewport monitor initialised");
        Self {
            breakpoints,
            size: Observable::new(size),
            device_class: Observable::new(class),
            pointer: Observable::new(pointer),
        }
    }

    /// Handle a resize signal.
    pub fn on_resize(&mut self, size: ViewportSize) -> ViewportChange {
        let previous = self.device_class.get();
        let current = DeviceClass::classify(size.width, self.breakpoints);

        self.size.set(size);
        self.device_class.set(current);

        if previous != current {
            info!(?previous, ?current, width = size.width, "device class changed");
        } else {
            debug!(width = size.width, height = size.height, "viewport resized");
        }

        ViewportChange {
            previous,
            current,
            size,
        }
    }

    /// Handle a pointer-move signal.
    pub fn on_pointer_move(&mut self, position: PointerPosition) {
        self.pointer.set(position);
    }

    /// Current device class.
    pub fn device_class(&self) -> DeviceClass {
        self.device_class.get()
    }

    /// Current pointer position.
    pub fn pointer(&self) -> PointerPosition {
        self.pointer.get()
    }

    /// Current viewport size.
    pub fn size(&self) -> ViewportSize {
        self.size.get()
    }

    /// Breakpoints used for classification.
    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Read-only device class for consumers.
    pub fn device_class_signal(&self) -> ReadSignal<DeviceClass> {
        self.device_class.reader()
    }

    /// Read-only pointer position for consumers.
    pub fn pointer_signal(&self) -> ReadSignal<PointerPosition> {
        self.pointer.reader()
    }

    /// Read-only viewport size for consumers.
    pub fn size_signal(&self) -> ReadSignal<ViewportSize> {
        self.size.reader()
    }

    /// Run `callback` on every resize with the recomputed class.
    pub fn subscribe_device_class(
        &self,
        callback: impl FnMut(&DeviceClass) + 'static,
    ) -> Subscription {
        self.device_class.subscribe(callback)
    }

    /// Run `callback` on every pointer move.
    pub fn subscribe_pointer(
        &self,
        callback: impl FnMut(&PointerPosition) + 'static,
    ) -> Subscription {
        self.pointer.subscribe(callback)
    }

    /// Number of live subscriptions across all signals.
    pub fn subscription_count(&self) -> usize {
        self.size.subscriber_count()
            + self.device_class.subscriber_count()
            + self.pointer.subscriber_count()
    }
}
