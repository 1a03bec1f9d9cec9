//! Editing session state.
//!
//! Everything a host needs to drive one learner editing a component
//! lives in [`Session`]: the editor surface, the linter, the debounce
//! deadline, the chosen help level, and the example the learner can
//! reset to. Hosts own a session value; nothing here is global.

use std::time::Instant;

use etude_critique::{Linter, Marker};

use crate::client::{ExecuteRequest, HelpLevel};
use crate::debounce::Debouncer;
use crate::surface::EditorSurface;

/// One learner, one component, one editor.
pub struct Session<S: EditorSurface> {
    surface: S,
    linter: Linter,
    debouncer: Debouncer,
    help_level: HelpLevel,
    example: Option<String>,
}

impl<S: EditorSurface> Session<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            linter: Linter::new(),
            debouncer: Debouncer::default(),
            help_level: HelpLevel::default(),
            example: None,
        }
    }

    pub fn with_debouncer(mut self, debouncer: Debouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn help_level(&self) -> HelpLevel {
        self.help_level
    }

    pub fn set_help_level(&mut self, level: HelpLevel) {
        self.help_level = level;
    }

    /// Load an example into the editor and remember it for [`reset`].
    ///
    /// Loading counts as an edit: validation is scheduled, not run
    /// inline.
    ///
    /// [`reset`]: Session::reset
    pub fn load_example(&mut self, source: &str, now: Instant) {
        self.example = Some(source.to_string());
        self.surface.set_value(source);
        self.debouncer.note(now);
    }

    /// Restore the loaded example, discarding the learner's edits.
    ///
    /// No-op when no example has been loaded.
    pub fn reset(&mut self, now: Instant) {
        if let Some(example) = self.example.clone() {
            self.surface.set_value(&example);
            self.debouncer.note(now);
        }
    }

    /// Record that the editor content changed at `now`.
    ///
    /// For surfaces the host mutates directly; when the host holds the
    /// new text itself, use [`update_content`].
    ///
    /// [`update_content`]: Session::update_content
    pub fn note_edit(&mut self, now: Instant) {
        self.debouncer.note(now);
    }

    /// Push new content into the surface and schedule validation.
    pub fn update_content(&mut self, text: &str, now: Instant) {
        self.surface.set_value(text);
        self.debouncer.note(now);
    }

    /// Run validation if the quiet period has elapsed.
    ///
    /// Lints whatever the surface holds *now*, so a burst of edits is
    /// validated once, against its final content. Returns the markers
    /// when a run happened.
    pub fn poll(&mut self, now: Instant) -> Option<Vec<Marker>> {
        if self.debouncer.poll(now) {
            Some(self.validate_now())
        } else {
            None
        }
    }

    /// Validate immediately, bypassing the debounce window.
    pub fn validate_now(&mut self) -> Vec<Marker> {
        let markers = self.linter.validate(&self.surface.value());
        self.surface.set_markers(&markers);
        markers
    }

    /// Build an execute request for the current editor content.
    pub fn execute_request(&self) -> ExecuteRequest {
        ExecuteRequest::for_component(&self.surface.value(), self.help_level)
    }

    /// Replace the editor content with a backend-suggested fix.
    pub fn apply_solution(&mut self, solution: &str, now: Instant) {
        self.surface.set_value(solution);
        self.debouncer.note(now);
    }
}
