//! Property tests for selection overwrite and argument ordering.

use proptest::prelude::*;
use qplot_dispatch::{
    run, Arg, Args, Canvas, Command, DispatchError, DispatchOptions, Draw, Drawn, ObjectStyle,
    PlotObject, StyleStore, StyleVariant, Visit,
};
use qplot_pipe::{Recorder, Session, Transport};
use std::io::{self, Write};

// ============================================================================
// Fixtures: one object type with three alternatives
// ============================================================================

struct Cells;

#[derive(Clone)]
struct Alpha;
#[derive(Clone)]
struct Beta;
#[derive(Clone)]
struct Gamma;

struct Size(u32);

enum CellStyles {
    Alpha(Alpha),
    Beta(Beta),
    Gamma(Gamma),
}

macro_rules! alternative {
    ($style:ident, $text:literal) => {
        impl Draw<Cells> for $style {
            fn draw(&self, session: &mut Session, _cells: &Cells) -> io::Result<Drawn> {
                writeln!(session, $text)?;
                Ok(Drawn::Rendered)
            }
        }

        impl ObjectStyle for $style {
            type Supports = (Cells,);
        }

        impl From<$style> for CellStyles {
            fn from(style: $style) -> Self {
                CellStyles::$style(style)
            }
        }

        impl Arg for $style {
            fn command(&self) -> Command<'_> {
                Command::Select(self)
            }
        }
    };
}

alternative!(Alpha, "alpha");
alternative!(Beta, "beta");
alternative!(Gamma, "gamma");

impl PlotObject for Cells {
    type Styles = CellStyles;
}

impl StyleVariant for CellStyles {
    fn alternative(&self) -> &'static str {
        match self {
            CellStyles::Alpha(_) => "Alpha",
            CellStyles::Beta(_) => "Beta",
            CellStyles::Gamma(_) => "Gamma",
        }
    }
}

impl Visit<Cells> for CellStyles {
    fn visit(&self, session: &mut Session, cells: &Cells) -> io::Result<Drawn> {
        match self {
            CellStyles::Alpha(s) => s.draw(session, cells),
            CellStyles::Beta(s) => s.draw(session, cells),
            CellStyles::Gamma(s) => s.draw(session, cells),
        }
    }
}

impl Canvas for Size {
    fn apply(&self, session: &mut Session) -> io::Result<()> {
        writeln!(session, "size {}", self.0)
    }
}

impl Arg for Size {
    fn command(&self) -> Command<'_> {
        Command::Canvas(self)
    }
}

impl Arg for Cells {
    fn command(&self) -> Command<'_> {
        Command::Object(self)
    }
}

fn style_arg(index: u8) -> Box<dyn Arg> {
    match index % 3 {
        0 => Box::new(Alpha),
        1 => Box::new(Beta),
        _ => Box::new(Gamma),
    }
}

fn style_text(index: u8) -> &'static str {
    ["alpha", "beta", "gamma"][(index % 3) as usize]
}

fn execute(args: &[&dyn Arg], store: &mut StyleStore) -> (Result<(), DispatchError>, String) {
    let recorder = Recorder::new();
    let mut session = recorder.open().unwrap();
    let result = run(&mut session, store, &args.commands(), &DispatchOptions::default()).map(|_| ());
    session.close().unwrap();
    (result, recorder.last().unwrap())
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// After any sequence of selections, the object is drawn once by the last one.
    #[test]
    fn last_selection_wins(selections in prop::collection::vec(0u8..3, 1..12)) {
        let cells = Cells;
        let styles: Vec<Box<dyn Arg>> = selections.iter().copied().map(style_arg).collect();
        let mut args: Vec<&dyn Arg> = styles.iter().map(|s| &**s).collect();
        args.push(&cells);

        let mut store = StyleStore::new();
        let (result, out) = execute(&args, &mut store);
        prop_assert!(result.is_ok());

        let expected = format!("{}\n", style_text(*selections.last().unwrap()));
        prop_assert_eq!(out, expected);
        prop_assert_eq!(store.len(), 1);
    }

    /// Each object is drawn by the selection that precedes it in the list.
    #[test]
    fn selections_apply_to_following_objects(selections in prop::collection::vec(0u8..3, 1..8)) {
        let styles: Vec<Box<dyn Arg>> = selections.iter().copied().map(style_arg).collect();
        let cells = Cells;
        let mut args: Vec<&dyn Arg> = Vec::new();
        for style in &styles {
            args.push(&**style);
            args.push(&cells);
        }

        let mut store = StyleStore::new();
        let (_, out) = execute(&args, &mut store);

        let expected: String = selections.iter().map(|&i| format!("{}\n", style_text(i))).collect();
        prop_assert_eq!(out, expected);
    }

    /// Canvas styles write in place and never create store entries.
    #[test]
    fn canvas_styles_never_enter_store(sizes in prop::collection::vec(1u32..2000, 0..10)) {
        let canvas: Vec<Size> = sizes.iter().copied().map(Size).collect();
        let args: Vec<&dyn Arg> = canvas.iter().map(|c| c as &dyn Arg).collect();

        let mut store = StyleStore::new();
        let (result, out) = execute(&args, &mut store);
        prop_assert!(result.is_ok());
        prop_assert!(store.is_empty());

        let expected: String = sizes.iter().map(|s| format!("size {}\n", s)).collect();
        prop_assert_eq!(out, expected);
    }
}

// ============================================================================
// Persistence across argument lists
// ============================================================================

#[test_log::test]
fn test_store_outlives_argument_list() {
    let mut store = StyleStore::new();
    let (first, _) = execute(&[&Beta], &mut store);
    first.unwrap();

    let (second, out) = execute(&[&Cells], &mut store);
    second.unwrap();
    assert_eq!(out, "beta\n");
}

#[test_log::test]
fn test_object_before_any_selection_fails() {
    let mut store = StyleStore::new();
    let (result, out) = execute(&[&Size(10), &Cells, &Alpha], &mut store);

    match result {
        Err(DispatchError::UnresolvedStyle { object }) => assert_eq!(object, "Cells"),
        other => panic!("Expected UnresolvedStyle, got {:?}", other),
    }
    assert_eq!(out, "size 10\n");
    assert!(store.is_empty());
}
