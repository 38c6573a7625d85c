use std::io;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// the wait expired with nothing to handle
    Timeout,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource {
    /// Block for up to `timeout` waiting for an event. Returns
    /// `TapEvent::Timeout` when nothing arrives in time.
    fn recv_timeout(&mut self, timeout: Duration) -> io::Result<TapEvent>;
}

/// Production event source. Polls crossterm on the calling thread.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&mut self, timeout: Duration) -> io::Result<TapEvent> {
        if !event::poll(timeout)? {
            return Ok(TapEvent::Timeout);
        }

        Ok(match event::read()? {
            CtEvent::Key(key) => TapEvent::Key(key),
            CtEvent::Resize(w, h) => TapEvent::Resize(w, h),
            // mouse, focus, paste: nothing to do but redraw
            _ => TapEvent::Timeout,
        })
    }
}

/// Test event source fed through a channel
pub struct TestEventSource {
    rx: Receiver<TapEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<TapEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&mut self, timeout: Duration) -> io::Result<TapEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(ev) => Ok(ev),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                Ok(TapEvent::Timeout)
            }
        }
    }
}

/// Configurable ticker interface
pub trait Ticker {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Runner that advances the application one event at a time
pub struct Runner<E: EventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to one tick interval and returns the next event, or Timeout
    pub fn step(&mut self) -> io::Result<TapEvent> {
        self.event_source.recv_timeout(self.ticker.interval())
    }
}
