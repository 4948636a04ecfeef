//! Recurring browser timer.

#[cfg(target_arch = "wasm32")]
use storefront_contract::WidgetSetupError;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug)]
/// Handle to a running `setInterval` timer.
///
/// Dropping the handle leaves the timer running for the page lifetime; call
/// [`IntervalHandle::cancel`] to stop it.
pub struct IntervalHandle {
    #[cfg(target_arch = "wasm32")]
    window: web_sys::Window,
    #[cfg(target_arch = "wasm32")]
    id: i32,
}

impl IntervalHandle {
    /// Calls `tick` every `period_ms` milliseconds until cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetSetupError::InvalidConfig`] when `period_ms` exceeds the browser's timer
    /// range and [`WidgetSetupError::Dom`] when the timer cannot be registered.
    #[cfg(target_arch = "wasm32")]
    pub fn every(
        window: &web_sys::Window,
        period_ms: u32,
        tick: impl FnMut() + 'static,
    ) -> Result<Self, WidgetSetupError> {
        let timeout = i32::try_from(period_ms).map_err(|_| {
            WidgetSetupError::InvalidConfig(format!("interval {period_ms}ms out of range"))
        })?;
        let callback = Closure::<dyn FnMut()>::wrap(Box::new(tick));
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|err| WidgetSetupError::Dom(format!("setInterval failed: {err:?}")))?;
        callback.forget();
        Ok(Self {
            window: window.clone(),
            id,
        })
    }

    /// Stops the timer. The callback never fires again.
    pub fn cancel(self) {
        #[cfg(target_arch = "wasm32")]
        self.window.clear_interval_with_handle(self.id);
    }
}
