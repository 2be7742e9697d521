//! Style updates, canvas application and object dispatch.
//!
//! [`run`] is the entry point used by the engine: it walks a classified
//! argument list left to right. The other functions are the individual steps
//! and are usable on their own.

use crate::classify::Command;
use crate::error::{DispatchError, Result};
use crate::report::{Report, Step};
use crate::store::{short_type_name, StyleStore};
use crate::style::{Canvas, Drawn, ObjectStyle, PlotObject, StyleVariant, Supports, Visit};
use qplot_pipe::Session;

/// What to do when a selected style has no handler for an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Skip without a diagnostic.
    Ignore,
    /// Skip and log a warning.
    #[default]
    Warn,
    /// Fail with [`DispatchError::Unsupported`].
    Error,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOptions {
    pub unsupported: UnsupportedPolicy,
}

impl DispatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }
}

/// Result of dispatching one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub object: &'static str,
    pub style: &'static str,
    pub drawn: Drawn,
}

/// Stores `style` as the selection for every object type it supports.
pub fn update<S: ObjectStyle>(store: &mut StyleStore, style: &S) {
    log::debug!(
        "updating {} object type(s) with {}",
        <S::Supports as Supports<S>>::LEN,
        short_type_name::<S>()
    );
    S::Supports::select(store, style);
}

pub fn apply_canvas(session: &mut Session, style: &dyn Canvas) -> Result<()> {
    log::debug!("applying canvas style {}", style.name());
    style.apply(session)?;
    Ok(())
}

/// Draws `object` with the style currently selected for its type.
///
/// Exactly one alternative is visited. If that alternative cannot draw `T`
/// nothing is written and the outcome says [`Drawn::Unsupported`].
pub fn dispatch<T>(session: &mut Session, store: &StyleStore, object: &T) -> Result<Outcome>
where
    T: PlotObject,
    T::Styles: Visit<T>,
{
    let styles = store.get::<T>()?;
    let drawn = styles.visit(session, object)?;
    Ok(Outcome {
        object: short_type_name::<T>(),
        style: styles.alternative(),
        drawn,
    })
}

/// Executes `commands` in order against `session` and `store`.
///
/// Stops at the first error; steps already taken (including store updates)
/// are not undone.
pub fn run(
    session: &mut Session,
    store: &mut StyleStore,
    commands: &[Command<'_>],
    options: &DispatchOptions,
) -> Result<Report> {
    let mut report = Report::new();

    for command in commands {
        match *command {
            Command::Select(style) => {
                style.select_into(store);
                report.push(Step::Selected {
                    style: style.style_name(),
                    objects: style.supported().iter().map(|k| k.short_name()).collect(),
                });
            }
            Command::Canvas(style) => {
                apply_canvas(session, style)?;
                report.push(Step::Canvas { style: style.name() });
            }
            Command::Object(object) => {
                let outcome = object.dispatch(session, store)?;
                match outcome.drawn {
                    Drawn::Rendered => report.push(Step::Drawn {
                        object: outcome.object,
                        style: outcome.style,
                    }),
                    Drawn::Unsupported => {
                        match options.unsupported {
                            UnsupportedPolicy::Ignore => {}
                            UnsupportedPolicy::Warn => log::warn!(
                                "style {} has no handler for {}; nothing drawn",
                                outcome.style,
                                outcome.object
                            ),
                            UnsupportedPolicy::Error => {
                                return Err(DispatchError::Unsupported {
                                    object: outcome.object,
                                    style: outcome.style,
                                })
                            }
                        }
                        report.push(Step::Skipped {
                            object: outcome.object,
                            style: outcome.style,
                        });
                    }
                }
            }
        }
    }

    Ok(report)
}
