//! The control loop against fake collaborators.

use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use wortuhr::adjust::Gesture;
use wortuhr::app::WordClock;
use wortuhr::display::Display;
use wortuhr::light::LightSensor;
use wortuhr::render::{ErrorCode, FrameBuffer, Renderer};
use wortuhr::rtc::ClockSource;
use wortuhr::translate::phrase_for_time;
use wortuhr::{Error, Result};

/// The fakes never yield, so polling with a no-op waker runs to completion.
fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let mut context = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut context) {
            return output;
        }
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<FrameBuffer>,
    brightness: Vec<u8>,
}

struct FakeClock {
    time: Rc<RefCell<(u8, u8, u8)>>,
    fail_begin: bool,
}

impl ClockSource for FakeClock {
    fn begin(&mut self) -> Result<()> {
        if self.fail_begin {
            Err(Error::ClockInit)
        } else {
            Ok(())
        }
    }

    fn now(&self) -> (u8, u8, u8) {
        *self.time.borrow()
    }

    fn adjust(&mut self, hour: u8, minute: u8) {
        *self.time.borrow_mut() = (hour, minute, 0);
    }

    fn has_lost_power(&self) -> bool {
        false
    }
}

struct FakeDisplay(Rc<RefCell<Recorder>>);

impl Display for FakeDisplay {
    fn set_brightness(&mut self, level: u8) {
        self.0.borrow_mut().brightness.push(level);
    }

    async fn show(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.0.borrow_mut().frames.push(*frame);
        Ok(())
    }
}

struct FakeSensor(u16);

impl LightSensor for FakeSensor {
    async fn read_raw(&mut self) -> u16 {
        self.0
    }
}

type Fixture = (
    WordClock<FakeClock, FakeDisplay, FakeSensor>,
    Rc<RefCell<(u8, u8, u8)>>,
    Rc<RefCell<Recorder>>,
);

fn clock_at(hour: u8, minute: u8) -> Fixture {
    let time = Rc::new(RefCell::new((hour, minute, 0)));
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let clock = FakeClock {
        time: Rc::clone(&time),
        fail_begin: false,
    };
    let word_clock = WordClock::new(clock, FakeDisplay(Rc::clone(&recorder)), FakeSensor(200));
    (word_clock, time, recorder)
}

#[test]
fn a_tick_paints_the_current_time_once() {
    let (mut clock, _time, recorder) = clock_at(10, 0);
    block_on(clock.tick()).expect("tick");
    block_on(clock.tick()).expect("tick");
    let recorder = recorder.borrow();
    assert_eq!(recorder.frames.len(), 1, "same minute must not repaint");
    let mut renderer = Renderer::new();
    let expected = *renderer.render(&phrase_for_time(10, 0).expect("valid"));
    assert_eq!(recorder.frames[0], expected);
}

#[test]
fn a_minute_rollover_repaints() {
    let (mut clock, time, recorder) = clock_at(10, 0);
    block_on(clock.tick()).expect("tick");
    *time.borrow_mut() = (10, 1, 0);
    block_on(clock.tick()).expect("tick");
    assert_eq!(recorder.borrow().frames.len(), 2);
}

#[test]
fn brightness_updates_on_every_tick() {
    let (mut clock, _time, recorder) = clock_at(10, 0);
    for _ in 0..3 {
        block_on(clock.tick()).expect("tick");
    }
    let recorder = recorder.borrow();
    assert_eq!(recorder.brightness.len(), 3);
    assert!(recorder.brightness.iter().all(|&level| (5..=45).contains(&level)));
}

#[test]
fn a_gesture_reseats_the_clock_and_forces_a_repaint() {
    let (mut clock, time, recorder) = clock_at(10, 30);
    block_on(clock.tick()).expect("tick");
    clock.apply_gesture(Gesture::DoubleTap).expect("gesture");
    assert_eq!(*time.borrow(), (11, 30, 0));
    // The minute reading is unchanged, but the gesture invalidated the frame.
    block_on(clock.tick()).expect("tick");
    assert_eq!(recorder.borrow().frames.len(), 2);
}

#[test]
fn a_dead_clock_source_shows_the_error_frame() {
    let time = Rc::new(RefCell::new((0, 0, 0)));
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let clock = FakeClock {
        time,
        fail_begin: true,
    };
    let mut word_clock = WordClock::new(clock, FakeDisplay(Rc::clone(&recorder)), FakeSensor(0));
    assert!(matches!(
        block_on(word_clock.begin()),
        Err(Error::ClockInit)
    ));
    let mut renderer = Renderer::new();
    let expected = *renderer.render_error(ErrorCode::ClockInit);
    assert_eq!(recorder.borrow().frames.as_slice(), &[expected]);
}
