//! The editor capability seam.
//!
//! The session treats the text editor as an external collaborator behind
//! a minimal interface, so any widget (CodeMirror, Monaco, a file, a plain
//! buffer) can host it. The linter core never sees the editor at all; it
//! only produces markers for `set_markers`.

use etude_critique::Marker;

/// Minimal capabilities the session needs from an editor.
pub trait EditorSurface {
    /// Current document content
    fn value(&self) -> String;

    /// Replace the document content
    fn set_value(&mut self, value: &str);

    /// Replace the displayed marker set.
    ///
    /// The previous set is discarded wholesale; markers are never merged.
    fn set_markers(&mut self, markers: &[Marker]);
}

/// An in-memory surface, for tests and headless hosts.
#[derive(Debug, Default)]
pub struct BufferSurface {
    value: String,
    markers: Vec<Marker>,
    marker_updates: usize,
}

impl BufferSurface {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            markers: Vec::new(),
            marker_updates: 0,
        }
    }

    /// The markers from the most recent update
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// How many times the marker set has been replaced
    pub fn marker_updates(&self) -> usize {
        self.marker_updates
    }
}

impl EditorSurface for BufferSurface {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_markers(&mut self, markers: &[Marker]) {
        self.markers = markers.to_vec();
        self.marker_updates += 1;
    }
}
