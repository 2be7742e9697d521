//! Style traits.
//!
//! A style is anything that writes protocol text into a [`Session`]. There
//! are two invocation forms:
//!
//! - [`Canvas`]: `(session)`, for global effects such as output file, terminal
//!   size or palette.
//! - [`Draw<T>`]: `(session, object)`, for rendering one object of type `T`.
//!
//! Object styles additionally declare, through [`ObjectStyle::Supports`], the
//! ordered list of object types they can be selected for. Each object type in
//! turn names, through [`PlotObject::Styles`], the closed set of styles that
//! are legal for it (a [`StyleVariant`]).

use crate::store::{ObjectKey, StyleStore};
use qplot_pipe::Session;
use std::io;

/// The `(session)` invocation form.
pub trait Canvas {
    fn apply(&self, session: &mut Session) -> io::Result<()>;

    fn name(&self) -> &'static str {
        crate::store::short_type_name::<Self>()
    }
}

/// Whether a [`Draw`] call produced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawn {
    Rendered,
    /// The style has no handler for this object type. Nothing was written.
    Unsupported,
}

/// The `(session, object)` invocation form.
///
/// Implementations that render return [`Drawn::Rendered`]. The provided
/// method writes nothing and reports [`Drawn::Unsupported`], so an empty impl
/// declares that a style is part of an object's variant set without being
/// able to draw it:
///
/// ```ignore
/// impl Draw<Series> for HeatMap {}
/// ```
pub trait Draw<T> {
    fn draw(&self, session: &mut Session, object: &T) -> io::Result<Drawn> {
        let _ = (session, object);
        Ok(Drawn::Unsupported)
    }
}

/// A style that is selected for object types rather than applied directly.
///
/// `Supports` is a tuple of object types, e.g. `(Grid,)` or `(Grid, Series)`.
/// Each of those types must accept this style in its variant set; that is
/// checked at compile time through the `From` bound on [`Supports`].
pub trait ObjectStyle: Clone + 'static {
    type Supports: Supports<Self>;
}

/// An ordered list of object types a style can be selected for.
pub trait Supports<S> {
    const LEN: usize;

    fn keys() -> Vec<ObjectKey>;

    /// Writes `style` into `store` for every listed object type, replacing
    /// whatever was selected before.
    fn select(store: &mut StyleStore, style: &S);
}

impl<S> Supports<S> for () {
    const LEN: usize = 0;

    fn keys() -> Vec<ObjectKey> {
        Vec::new()
    }

    fn select(_store: &mut StyleStore, _style: &S) {}
}

macro_rules! impl_supports {
    ($($t:ident),+) => {
        impl<S, $($t),+> Supports<S> for ($($t,)+)
        where
            S: Clone,
            $($t: PlotObject, $t::Styles: From<S>,)+
        {
            const LEN: usize = [$(stringify!($t)),+].len();

            fn keys() -> Vec<ObjectKey> {
                vec![$(ObjectKey::of::<$t>()),+]
            }

            fn select(store: &mut StyleStore, style: &S) {
                $(store.select::<$t>(From::from(style.clone()));)+
            }
        }
    };
}

impl_supports!(A);
impl_supports!(A, B);
impl_supports!(A, B, C);
impl_supports!(A, B, C, D);
impl_supports!(A, B, C, D, E);
impl_supports!(A, B, C, D, E, F);
impl_supports!(A, B, C, D, E, F, G);
impl_supports!(A, B, C, D, E, F, G, H);

/// A value that can be plotted.
///
/// `Styles` is the closed set of styles legal for this type. The style store
/// keeps at most one selection per implementing type.
pub trait PlotObject: 'static {
    type Styles: StyleVariant;
}

/// A closed union of style alternatives.
pub trait StyleVariant: 'static {
    /// Name of the alternative currently held.
    fn alternative(&self) -> &'static str;
}

/// Invokes the held alternative's [`Draw<T>`] handler.
pub trait Visit<T>: StyleVariant {
    fn visit(&self, session: &mut Session, object: &T) -> io::Result<Drawn>;
}
