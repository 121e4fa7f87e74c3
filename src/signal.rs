//! Press/release emission.
//!
//! A press runs `before_press_key`, then either the custom `press_key`
//! handler or the built-in keyboard fallback, then `after_press_key`.
//! A release runs `before_release_keys`, the optional `release_keys`
//! handler and `after_release_keys`. Release has no fallback.

use std::fmt;

use tracing::debug;

use crate::direction::Direction;
use crate::keyboard::{LogicalKey, SimulatedKey, SimulatedKeyboard};

pub type DirectionFn = Box<dyn FnMut(Direction)>;
pub type ReleaseFn = Box<dyn FnMut()>;

/// Owner-supplied callbacks around key emission. Every slot is optional.
#[derive(Default)]
pub struct KeyHooks {
    pub press_key: Option<DirectionFn>,
    pub release_keys: Option<ReleaseFn>,
    pub before_press_key: Option<DirectionFn>,
    pub after_press_key: Option<DirectionFn>,
    pub before_release_keys: Option<ReleaseFn>,
    pub after_release_keys: Option<ReleaseFn>,
}

impl fmt::Debug for KeyHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHooks")
            .field("press_key", &self.press_key.is_some())
            .field("release_keys", &self.release_keys.is_some())
            .field("before_press_key", &self.before_press_key.is_some())
            .field("after_press_key", &self.after_press_key.is_some())
            .field("before_release_keys", &self.before_release_keys.is_some())
            .field("after_release_keys", &self.after_release_keys.is_some())
            .finish()
    }
}

/// Turns abstract press/release signals into hook calls or simulated keys.
#[derive(Debug)]
pub struct SignalEmitter {
    hooks: KeyHooks,
    keyboard: SimulatedKeyboard,
    debug: bool,
}

impl SignalEmitter {
    pub fn new(hooks: KeyHooks, debug: bool) -> Self {
        Self {
            hooks,
            keyboard: SimulatedKeyboard::new(),
            debug,
        }
    }

    pub fn press(&mut self, direction: Direction) {
        if let Some(hook) = self.hooks.before_press_key.as_mut() {
            hook(direction);
        }

        match self.hooks.press_key.as_mut() {
            Some(press_key) => {
                press_key(direction);
                if self.debug {
                    debug!("pressed {direction} through custom press handler");
                }
            }
            None => {
                let key = LogicalKey::from(direction);
                self.keyboard.key_down(key);
                if self.debug {
                    debug!(
                        "pressed {direction}: simulated key-down {} (code {})",
                        key.name(),
                        key.key_code()
                    );
                }
            }
        }

        if let Some(hook) = self.hooks.after_press_key.as_mut() {
            hook(direction);
        }
    }

    pub fn release(&mut self) {
        if let Some(hook) = self.hooks.before_release_keys.as_mut() {
            hook();
        }

        match self.hooks.release_keys.as_mut() {
            Some(release_keys) => {
                release_keys();
                if self.debug {
                    debug!("released keys through custom release handler");
                }
            }
            None => {
                if self.debug {
                    debug!("released keys: no release handler configured");
                }
            }
        }

        if let Some(hook) = self.hooks.after_release_keys.as_mut() {
            hook();
        }
    }

    pub fn drain_key_events(&mut self) -> Vec<SimulatedKey> {
        self.keyboard.drain().collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output so tests can inspect it.
    #[derive(Clone, Default)]
    pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        /// Runs `f` with a subscriber that records everything down to TRACE.
        pub(crate) fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(self.clone())
                .with_max_level(tracing::Level::TRACE)
                .with_ansi(false)
                .finish();
            tracing::subscriber::with_default(subscriber, f)
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn recording_hooks(log: &Rc<RefCell<Vec<String>>>, with_handlers: bool) -> KeyHooks {
        let before_press = log.clone();
        let after_press = log.clone();
        let before_release = log.clone();
        let after_release = log.clone();
        let mut hooks = KeyHooks {
            before_press_key: Some(Box::new(move |d: Direction| {
                before_press.borrow_mut().push(format!("before-press {d}"))
            })),
            after_press_key: Some(Box::new(move |d: Direction| {
                after_press.borrow_mut().push(format!("after-press {d}"))
            })),
            before_release_keys: Some(Box::new(move || {
                before_release.borrow_mut().push("before-release".into())
            })),
            after_release_keys: Some(Box::new(move || {
                after_release.borrow_mut().push("after-release".into())
            })),
            ..KeyHooks::default()
        };
        if with_handlers {
            let press = log.clone();
            let release = log.clone();
            hooks.press_key = Some(Box::new(move |d: Direction| press.borrow_mut().push(format!("press {d}"))));
            hooks.release_keys = Some(Box::new(move || release.borrow_mut().push("release".into())));
        }
        hooks
    }

    #[test]
    fn hooks_bracket_custom_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = SignalEmitter::new(recording_hooks(&log, true), false);

        emitter.press(Direction::Left);
        emitter.release();

        assert_eq!(
            *log.borrow(),
            [
                "before-press left",
                "press left",
                "after-press left",
                "before-release",
                "release",
                "after-release",
            ]
        );
        assert!(emitter.drain_key_events().is_empty());
    }

    #[test]
    fn fallback_simulates_key_down_only() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = SignalEmitter::new(recording_hooks(&log, false), false);

        emitter.press(Direction::Up);
        emitter.release();

        assert_eq!(
            *log.borrow(),
            ["before-press up", "after-press up", "before-release", "after-release"]
        );
        // No key-up follows the release.
        assert_eq!(
            emitter.drain_key_events(),
            vec![SimulatedKey::Down(LogicalKey::ArrowUp)]
        );
    }

    #[test]
    fn release_without_handlers_is_silent() {
        let mut emitter = SignalEmitter::new(KeyHooks::default(), false);
        emitter.release();
        assert!(emitter.drain_key_events().is_empty());
    }

    #[test]
    fn debug_mode_describes_actions() {
        let logs = CapturedLogs::default();
        logs.capture(|| {
            let mut emitter = SignalEmitter::new(KeyHooks::default(), true);
            emitter.press(Direction::Right);
            emitter.release();
        });

        let output = logs.contents();
        assert!(output.contains("simulated key-down ArrowRight (code 39)"), "{output}");
        assert!(output.contains("no release handler configured"), "{output}");
    }

    #[test]
    fn no_output_without_debug_mode() {
        let logs = CapturedLogs::default();
        logs.capture(|| {
            let mut emitter = SignalEmitter::new(KeyHooks::default(), false);
            for direction in Direction::ALL {
                emitter.press(direction);
                emitter.release();
            }
        });

        assert!(logs.contents().is_empty());
    }
}
