//! Call-stack frames: the native capture shape and its display projection

use serde::Serialize;

use crate::inspect::Location;

/// How a frame's function was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    /// Associated call (`Type::function`).
    Static,
    /// Method call on an instance.
    Instance,
}

impl CallKind {
    /// Marker rendered between the type and the function name.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            CallKind::Static => "::",
            CallKind::Instance => ".",
        }
    }
}

/// One native call-stack entry as captured at raise time.
///
/// `class` is the full type path of the frame's receiver, absent for free
/// functions. `args` holds pre-rendered argument values; capture may leave
/// it empty.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct RawFrame {
    pub class: Option<String>,
    pub call: Option<CallKind>,
    pub function: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub args: Vec<String>,
}

impl RawFrame {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            class: None,
            call: None,
            function: function.into(),
            file: None,
            line: None,
            args: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>, call: CallKind) -> Self {
        self.class = Some(class.into());
        self.call = Some(call);
        self
    }

    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item: Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Display-ready projection of one trace entry.
///
/// String fields are empty rather than absent when the native entry has no
/// type path; `file` and `line` stay optional because capture does not
/// always know them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceFrame {
    pub namespace: String,
    pub short_class: String,
    pub class: String,
    pub call: Option<CallKind>,
    pub function: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub args: Vec<String>,
}

impl TraceFrame {
    /// Head record synthesized from the error's own origin rather than from
    /// a captured frame. Carries no class, call marker, function, or
    /// arguments.
    #[must_use]
    pub fn head(origin: Option<&Location>) -> Self {
        Self {
            namespace: String::new(),
            short_class: String::new(),
            class: String::new(),
            call: None,
            function: String::new(),
            file: origin.map(|o| o.file.clone()),
            line: origin.map(|o| o.line),
            args: Vec::new(),
        }
    }

    /// Normalize a native entry. The full type path splits on its last `::`
    /// into `namespace` and `short_class`; a path with no separator is all
    /// `short_class`.
    #[must_use]
    pub fn from_raw(raw: &RawFrame) -> Self {
        let (namespace, short_class) = match raw.class.as_deref() {
            Some(path) => match path.rfind("::") {
                Some(idx) => (path[..idx].to_owned(), path[idx + 2..].to_owned()),
                None => (String::new(), path.to_owned()),
            },
            None => (String::new(), String::new()),
        };

        Self {
            namespace,
            short_class,
            class: raw.class.clone().unwrap_or_default(),
            call: raw.call,
            function: raw.function.clone(),
            file: raw.file.clone(),
            line: raw.line,
            args: raw.args.clone(),
        }
    }
}
