use super::*;
use crate::core::event::{Buttons, Mouse};
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::id::Id;
use crate::ui::core::widget::{Env, NoticeKind, Update, Widget};
use crate::ui::widgets::{BoxUi, Button, Label};

struct Echo {
    label: Id,
    seen: Vec<Notice>,
}

impl App for Echo {
    fn notices(&mut self, notices: Vec<Notice>) -> Vec<Command> {
        let clicked = notices
            .iter()
            .any(|n| matches!(n.kind, NoticeKind::Clicked { .. }));
        self.seen.extend(notices);
        if !clicked {
            return Vec::new();
        }
        vec![Command::Update {
            target: self.label,
            update: Update::Text("clicked".to_string()),
        }]
    }

    fn tick(&mut self, seq: u64) -> Vec<Command> {
        vec![Command::Update {
            target: self.label,
            update: Update::Text(format!("tick {}", seq)),
        }]
    }
}

fn setup() -> (Driver, Echo) {
    let label = Label::new("idle");
    let app = Echo {
        label: label.id(),
        seen: Vec::new(),
    };
    let root = BoxUi::new(vec![Box::new(Button::new("go")), Box::new(label)])
        .with_margin(Size::new(1, 0));
    let mut driver = Driver::new(Box::new(root), Env::default(), Size::new(30, 1));
    driver.render();
    (driver, app)
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Message {
    Message::Input(InputEvent::Key(Key::new(code, modifiers)))
}

#[test]
fn ctrl_q_and_ctrl_c_quit() {
    let (mut d, mut app) = setup();
    assert!(matches!(
        step(&mut d, &mut app, key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        Flow::Quit
    ));
    assert!(matches!(
        step(&mut d, &mut app, key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Flow::Quit
    ));
    assert!(matches!(
        step(&mut d, &mut app, key(KeyCode::Char('q'), KeyModifiers::NONE)),
        Flow::Continue
    ));
}

#[test]
fn notices_round_trip_through_the_app() {
    let (mut d, mut app) = setup();
    let at = Pos::new(1, 0);
    step(&mut d, &mut app, Message::Input(InputEvent::Mouse(Mouse::press(at, Buttons::LEFT))));
    step(
        &mut d,
        &mut app,
        Message::Input(InputEvent::Mouse(Mouse::release(at, Buttons::LEFT))),
    );

    assert_eq!(app.seen.len(), 1);
    assert!(d.frame());
    assert!(d.surface().row_text(0).contains("clicked"));
}

#[test]
fn ticks_reach_the_app() {
    let (mut d, mut app) = setup();
    assert!(matches!(step(&mut d, &mut app, Message::Tick(3)), Flow::Continue));
    d.frame();
    assert!(d.surface().row_text(0).contains("tick 3"));
}

#[test]
fn termination_and_input_failure_end_the_loop() {
    let (mut d, mut app) = setup();
    assert!(matches!(
        step(&mut d, &mut app, Message::Terminate(TerminationSignal::SigTerm)),
        Flow::Terminated(TerminationSignal::SigTerm)
    ));
    assert!(matches!(
        step(&mut d, &mut app, Message::InputClosed(None)),
        Flow::Quit
    ));
    let err = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
    assert!(matches!(
        step(&mut d, &mut app, Message::InputClosed(Some(err))),
        Flow::Failed(_)
    ));
}

#[test]
fn resize_schedules_a_full_pass() {
    let (mut d, mut app) = setup();
    step(&mut d, &mut app, Message::Input(InputEvent::Resize(40, 2)));
    assert!(d.pending());
    assert!(d.frame());
    assert_eq!(d.surface().size(), Size::new(40, 2));
}
