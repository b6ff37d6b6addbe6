/// A periodically sampled source of benchmark trigger events.
///
/// The driving loop samples the source on a fixed cadence. Each
/// `Some(true)` is one discrete fired event, not level state: debouncing
/// and edge detection are the implementor's responsibility. `None` means
/// the source is exhausted and the driving loop should stop.
pub trait TriggerSource {
    /// Sample the source for a fired event.
    fn sample(&mut self) -> Option<bool>;
}
