use gloo_timers::callback::Timeout;

/// One-shot, fire-and-forget delayed execution.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(delay_ms, task);
        timeout.forget();
    }
}
