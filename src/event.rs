use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, MouseEvent};

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Reads the terminal on a helper thread and forwards events, interleaved
/// with ticks at a fixed cadence, to the loop thread.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || pump(event::poll, event::read, &tx, tick_rate));

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

/// Event loop of the reader thread. Returns once the receiver is gone.
fn pump<P, R>(mut poll: P, mut read: R, tx: &mpsc::Sender<Event>, tick_rate: Duration)
where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<event::Event>,
{
    let mut last_tick = Instant::now();
    loop {
        // Ticks keep their cadence even under a steady stream of input.
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        match poll(timeout) {
            Ok(true) => {
                let forwarded = match read() {
                    Ok(event::Event::Key(key)) => Some(Event::Key(key)),
                    Ok(event::Event::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                    Ok(event::Event::Resize(w, h)) => Some(Event::Resize(w, h)),
                    _ => None,
                };
                if let Some(ev) = forwarded {
                    if tx.send(ev).is_err() {
                        return;
                    }
                }
            }
            Ok(false) => {}
            // A dead input stream fails instantly; wait out the tick instead of spinning.
            Err(_) => thread::sleep(timeout),
        }
        if last_tick.elapsed() >= tick_rate {
            if tx.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
