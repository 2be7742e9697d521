//! Argument classification.
//!
//! Every argument handed to a plot call is one of three kinds:
//!
//! | Kind | Trait | Effect |
//! |------|-------|--------|
//! | canvas style | [`Canvas`] | written to the session immediately |
//! | object style | [`ObjectStyle`] | stored for each of its supported object types |
//! | plain object | [`PlotObject`] | drawn by the style stored for its type |
//!
//! The kind is fixed per type by its [`Arg`] impl, normally generated by the
//! `Style` and `PlotObject` derives. An argument list is turned into an
//! ordered `Vec<Command>` once and then executed left to right, so a style
//! argument affects every object after it in the same list.

use crate::error::Result;
use crate::resolve::{self, Outcome};
use crate::store::{short_type_name, ObjectKey, StyleStore};
use crate::style::{Canvas, ObjectStyle, PlotObject, Supports, Visit};
use qplot_pipe::Session;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    CanvasStyle,
    ObjectStyle,
    PlainObject,
}

/// A classified argument, borrowed from the argument list.
#[derive(Clone, Copy)]
pub enum Command<'a> {
    Select(&'a dyn Select),
    Canvas(&'a dyn Canvas),
    Object(&'a dyn Dispatch),
}

impl Command<'_> {
    pub fn kind(&self) -> ArgKind {
        match self {
            Command::Select(_) => ArgKind::ObjectStyle,
            Command::Canvas(_) => ArgKind::CanvasStyle,
            Command::Object(_) => ArgKind::PlainObject,
        }
    }
}

impl fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Select(style) => write!(f, "Select({})", style.style_name()),
            Command::Canvas(style) => write!(f, "Canvas({})", style.name()),
            Command::Object(object) => write!(f, "Object({})", object.key()),
        }
    }
}

/// A value that can appear in a plot call.
pub trait Arg {
    fn command(&self) -> Command<'_>;

    fn kind(&self) -> ArgKind {
        self.command().kind()
    }
}

impl<A: Arg + ?Sized> Arg for &A {
    fn command(&self) -> Command<'_> {
        (**self).command()
    }
}

/// Object-safe view of an [`ObjectStyle`].
pub trait Select {
    fn style_name(&self) -> &'static str;

    /// Object types this style is selected for, in declaration order.
    fn supported(&self) -> Vec<ObjectKey>;

    fn select_into(&self, store: &mut StyleStore);
}

impl<S: ObjectStyle> Select for S {
    fn style_name(&self) -> &'static str {
        short_type_name::<S>()
    }

    fn supported(&self) -> Vec<ObjectKey> {
        S::Supports::keys()
    }

    fn select_into(&self, store: &mut StyleStore) {
        resolve::update(store, self);
    }
}

/// Object-safe view of a [`PlotObject`] whose variant set can draw it.
pub trait Dispatch {
    fn key(&self) -> ObjectKey;

    fn dispatch(&self, session: &mut Session, store: &StyleStore) -> Result<Outcome>;
}

impl<T> Dispatch for T
where
    T: PlotObject,
    T::Styles: Visit<T>,
{
    fn key(&self) -> ObjectKey {
        ObjectKey::of::<T>()
    }

    fn dispatch(&self, session: &mut Session, store: &StyleStore) -> Result<Outcome> {
        resolve::dispatch(session, store, self)
    }
}

/// An ordered argument list.
///
/// Implemented for tuples of [`Arg`] up to twelve elements, for slices and
/// vectors of `&dyn Arg`, and for `()`.
///
/// ```ignore
/// qplot.plot((Filename::new("grid"), ContourPlot, &grid))?;
///
/// let args: Vec<&dyn Arg> = vec![&title, &grid];
/// qplot.plot(&args)?;
/// ```
pub trait Args {
    fn commands(&self) -> Vec<Command<'_>>;
}

impl<T: Args + ?Sized> Args for &T {
    fn commands(&self) -> Vec<Command<'_>> {
        (**self).commands()
    }
}

impl Args for () {
    fn commands(&self) -> Vec<Command<'_>> {
        Vec::new()
    }
}

impl Args for [&dyn Arg] {
    fn commands(&self) -> Vec<Command<'_>> {
        self.iter().map(|arg| arg.command()).collect()
    }
}

impl Args for Vec<&dyn Arg> {
    fn commands(&self) -> Vec<Command<'_>> {
        self.as_slice().commands()
    }
}

macro_rules! impl_args {
    ($($t:ident . $idx:tt),+) => {
        impl<$($t: Arg),+> Args for ($($t,)+) {
            fn commands(&self) -> Vec<Command<'_>> {
                vec![$(self.$idx.command()),+]
            }
        }
    };
}

impl_args!(A.0);
impl_args!(A.0, B.1);
impl_args!(A.0, B.1, C.2);
impl_args!(A.0, B.1, C.2, D.3);
impl_args!(A.0, B.1, C.2, D.3, E.4);
impl_args!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_args!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_args!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_args!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_args!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_args!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_args!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);

/// The kind of `A`, without needing a value.
pub fn kind_of<A: Arg + Default>() -> ArgKind {
    A::default().kind()
}
