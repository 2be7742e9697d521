//! A record of what one argument list did.

/// One processed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// An object style was stored for the listed object types.
    Selected {
        style: &'static str,
        objects: Vec<&'static str>,
    },
    /// A canvas style wrote to the session.
    Canvas { style: &'static str },
    /// An object was drawn by its selected style.
    Drawn {
        object: &'static str,
        style: &'static str,
    },
    /// The selected style had no handler for the object; nothing was written.
    Skipped {
        object: &'static str,
        style: &'static str,
    },
}

/// Ordered steps taken while processing an argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    steps: Vec<Step>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// `(object, style)` pairs that produced output, in order.
    pub fn drawn(&self) -> Vec<(&'static str, &'static str)> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Drawn { object, style } => Some((*object, *style)),
                _ => None,
            })
            .collect()
    }

    /// `(object, style)` pairs that were silently skipped, in order.
    pub fn skipped(&self) -> Vec<(&'static str, &'static str)> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Skipped { object, style } => Some((*object, *style)),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
