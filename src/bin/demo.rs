//! Widget showcase: every stock widget, a layout that switches between a compact and a wide
//! arrangement by width, and a counter driven by a background ticker.

use std::process::ExitCode;
use std::time::Duration;

use trellis::config::Config;
use trellis::tui::event_loop::{self, App};
use trellis::ui::core::geom::Size;
use trellis::ui::core::id::Id;
use trellis::ui::core::layout::Insets;
use trellis::ui::core::widget::{Env, Notice, NoticeKind, Update, Widget};
use trellis::ui::driver::{Command, Driver};
use trellis::ui::widgets::{
    equal_split, BoxUi, Button, Checkbox, Field, Grid, Halign, Label, List, ListValue, Pick,
    RadioGroup, Scroll, Split,
};

/// Below this width the compact arrangement is used.
const WIDE_FROM: i32 = 70;

struct Ids {
    ticks: Id,
    status: Id,
    greet: [Id; 2],
    reset: [Id; 2],
    name: [Id; 2],
}

struct DemoApp {
    ids: Ids,
    /// One group per arrangement; each owns the radios of its form.
    groups: Vec<RadioGroup>,
    name: String,
    greetings: usize,
}

impl App for DemoApp {
    fn notices(&mut self, notices: Vec<Notice>) -> Vec<Command> {
        let mut cmds = Vec::new();
        let mut status = None;
        for notice in notices {
            for group in &self.groups {
                cmds.extend(group.handle(&notice));
            }
            match notice.kind {
                NoticeKind::Edited { text } if self.ids.name.contains(&notice.source) => {
                    self.name = text;
                }
                NoticeKind::Clicked { .. } if self.ids.greet.contains(&notice.source) => {
                    self.greetings += 1;
                    let name = if self.name.is_empty() {
                        "world"
                    } else {
                        self.name.as_str()
                    };
                    status = Some(format!("hello, {} ({})", name, self.greetings));
                }
                NoticeKind::Clicked { .. } if self.ids.reset.contains(&notice.source) => {
                    self.greetings = 0;
                    status = Some("reset".to_string());
                }
                NoticeKind::Toggled { checked } => {
                    status = Some(format!("checkbox {}", if checked { "on" } else { "off" }));
                }
                NoticeKind::Selected { index, selected } => {
                    status = Some(format!("row {} {}", index, if selected { "on" } else { "off" }));
                }
                NoticeKind::Chosen { .. } => status = Some("delivery changed".to_string()),
                _ => {}
            }
        }
        cmds.extend(status.map(|text| Command::Update {
            target: self.ids.status,
            update: Update::Text(text),
        }));
        cmds
    }

    fn tick(&mut self, seq: u64) -> Vec<Command> {
        vec![Command::Update {
            target: self.ids.ticks,
            update: Update::Text(format!("ticks: {}", seq)),
        }]
    }

    fn tick_period(&self) -> Option<Duration> {
        Some(Duration::from_secs(1))
    }
}

fn rows() -> Vec<ListValue> {
    (1..=40).map(|i| ListValue::plain(format!("item {}", i))).collect()
}

fn controls(ids: &Ids, i: usize) -> Vec<Box<dyn Widget>> {
    vec![
        Box::new(Button::new("greet").with_id(ids.greet[i])),
        Box::new(Button::new("reset").with_id(ids.reset[i])),
        Box::new(Checkbox::new(false)),
        Box::new(
            Field::new("")
                .with_placeholder("your name")
                .with_id(ids.name[i]),
        ),
    ]
}

/// Labels right-aligned against their inputs.
fn form(group: &mut RadioGroup) -> Box<dyn Widget> {
    let row = |label: &str, input: Box<dyn Widget>| -> [Box<dyn Widget>; 2] {
        [Box::new(Label::new(label)), input]
    };
    let kids = [
        row("To", Box::new(Field::new("").with_placeholder("someone"))),
        row("Subject", Box::new(Field::new("").with_placeholder("hello"))),
        row("Urgent", Box::new(Checkbox::new(true))),
        row("Mail", Box::new(group.radio(true))),
        row("Chat", Box::new(group.radio(false))),
    ];
    Box::new(
        Grid::new(2, kids.into_iter().flatten().collect())
            .with_padding(Insets::xy(1, 0))
            .with_halign(vec![Halign::Right, Halign::Left]),
    )
}

fn compact(ids: &Ids, group: &mut RadioGroup) -> Box<dyn Widget> {
    let mut kids = controls(ids, 0);
    kids.push(form(group));
    kids.push(Box::new(List::new(rows())));
    Box::new(Scroll::new(
        BoxUi::new(kids)
            .with_padding(Insets::xy(1, 0))
            .with_margin(Size::new(2, 1)),
    ))
}

fn wide(ids: &Ids, group: &mut RadioGroup) -> Box<dyn Widget> {
    let mut kids = controls(ids, 1);
    kids.push(form(group));
    let left = BoxUi::new(kids)
        .with_padding(Insets::xy(2, 1))
        .with_margin(Size::new(2, 1));
    let right = Split::vertical(
        equal_split(2),
        vec![
            Box::new(Scroll::new(List::new(rows()).multiple())),
            Box::new(Scroll::new(List::new(rows()))),
        ],
    );
    Box::new(Split::horizontal(
        equal_split(2),
        vec![Box::new(left), Box::new(right)],
    ))
}

fn build(ids: &Ids, groups: &mut [RadioGroup; 2]) -> Box<dyn Widget> {
    let header = BoxUi::new(vec![
        Box::new(Label::new("trellis demo")),
        Box::new(Label::new("ticks: 0").with_id(ids.ticks)),
        Box::new(Label::new("").with_id(ids.status)),
    ])
    .with_padding(Insets::xy(1, 0))
    .with_margin(Size::new(3, 0));
    let body = Pick::new(
        vec![compact(ids, &mut groups[0]), wide(ids, &mut groups[1])],
        Box::new(|avail: Size| usize::from(avail.w >= WIDE_FROM)),
    );
    Box::new(Split::vertical(
        Box::new(|h| {
            let top = h.min(1);
            vec![top, h - top]
        }),
        vec![Box::new(header), Box::new(body)],
    ))
}

fn main() -> ExitCode {
    let _logging = std::env::var_os("HOME")
        .map(Config::for_home)
        .and_then(|config| config.ensure_log_dir().ok())
        .and_then(|dir| trellis::logging::init(&dir, "trellis-demo.log"));

    let ids = Ids {
        ticks: Id::next(),
        status: Id::next(),
        greet: [Id::next(), Id::next()],
        reset: [Id::next(), Id::next()],
        name: [Id::next(), Id::next()],
    };
    let mut groups = [RadioGroup::new(), RadioGroup::new()];
    let mut driver = Driver::new(build(&ids, &mut groups), Env::default(), Size::new(80, 24));
    let mut app = DemoApp {
        ids,
        groups: groups.into(),
        name: String::new(),
        greetings: 0,
    };

    match event_loop::run(&mut driver, &mut app, |_| {}) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(signal)) => ExitCode::from(signal.exit_code() as u8),
        Err(err) => {
            tracing::error!(error = %err, "terminal failure");
            eprintln!("trellis-demo: {}", err);
            ExitCode::FAILURE
        }
    }
}
