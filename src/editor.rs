//! The editor: icon state, mutation entry points and repaint scheduling.
//!
//! Every mutation updates the state synchronously, hands every listener a
//! fresh [`IconConfig`] snapshot, and asks the injected [`FrameScheduler`]
//! for a frame unless one is already pending. The host answers by calling
//! [`IconEditor::frame`], which runs the compositor once against whatever
//! the state is by then. Any number of mutations between two frames cost a
//! single compositor pass.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use pixicon::{IconEditor, LayoutConfig};
//!
//! let mut editor = IconEditor::new(LayoutConfig::default().with_available_width(320)).unwrap();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! editor.add_listener(move |config| sink.borrow_mut().push(config.items[0].path.clone()));
//!
//! editor.set_path("M2 2h12v12h-12z");
//! editor.apply_rotation(90, true);
//! assert_eq!(seen.borrow().len(), 2);
//!
//! assert!(editor.frame().unwrap());
//! let frame = editor.last_frame().unwrap();
//! assert_eq!(frame.image.dimensions(), (322, 322));
//! ```

use crate::error::EditorError;
use crate::export;
use crate::geometry::{Geometry, LayoutConfig, SizePx};
use crate::raster::{Compositor, PresentationBuffer, RasterCompositor, Scene};
use crate::state::{IconConfig, IconState};
use crate::symmetry::{Pivot, TransformSet, TransformStack};

// ============================================================================
// Frame scheduling
// ============================================================================

/// Asks the host for a frame callback.
///
/// The host must call [`IconEditor::frame`] on its next tick after a request.
/// Requests are made at most once per pending repaint.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// A scheduler that only counts requests; the caller steps frames by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualFrames {
    requested: usize,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of frames requested so far.
    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from an [`IconConfig`].
pub trait Configurable {
    /// Applies a serialized configuration to this instance.
    fn apply_config(&mut self, config: IconConfig) -> Result<(), EditorError>;

    /// Exports the current settings as a configuration.
    fn export_config(&self) -> IconConfig;
}

// ============================================================================
// IconEditor
// ============================================================================

/// Handle returned by [`IconEditor::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&IconConfig)>;

/// Owns the icon state and ties mutations to repaints and notifications.
pub struct IconEditor<C = RasterCompositor, S = ManualFrames> {
    state: IconState,
    stack: TransformStack,
    layout: LayoutConfig,
    geometry: Geometry,
    compositor: C,
    frames: S,
    pending: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    last_frame: Option<PresentationBuffer>,
}

impl IconEditor {
    /// Creates an editor with the default compositor and manual frames.
    pub fn new(layout: LayoutConfig) -> Result<Self, EditorError> {
        Self::with_parts(RasterCompositor::new(), ManualFrames::new(), layout)
    }
}

impl<C: Compositor, S: FrameScheduler> IconEditor<C, S> {
    /// Creates an editor with the default icon state.
    ///
    /// The initial state is scheduled for painting right away. Fails if the
    /// default grid does not fit `layout`.
    pub fn with_parts(compositor: C, frames: S, layout: LayoutConfig) -> Result<Self, EditorError> {
        let state = IconState::default();
        let SizePx { width, height } = state.size;
        let geometry = Geometry::compute(state.size, &layout).ok_or(EditorError::NoGeometry {
            x: width,
            y: height,
            available_width: layout.available_width,
        })?;

        let mut editor = Self {
            stack: TransformStack::new(Pivot::of_grid(state.size)),
            state,
            layout,
            geometry,
            compositor,
            frames,
            pending: false,
            listeners: Vec::new(),
            next_listener: 0,
            last_frame: None,
        };
        editor.schedule();
        Ok(editor)
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.state.path = path.into();
        self.changed();
    }

    /// Sets the stroke width in logical pixels.
    ///
    /// Returns `false`, changing nothing and notifying no one, for negative
    /// or non-finite widths.
    pub fn set_line_width(&mut self, width: f64) -> bool {
        if !width.is_finite() || width < 0.0 {
            tracing::debug!(width, "line width rejected");
            return false;
        }
        self.state.line_width = width;
        self.changed();
        true
    }

    /// Sets the stroke color. An empty string disables the stroke.
    pub fn set_stroke_style(&mut self, style: impl Into<String>) {
        self.state.stroke_style = style.into();
        self.changed();
    }

    pub fn set_fill_style(&mut self, style: impl Into<String>) {
        self.state.fill_style = style.into();
        self.changed();
    }

    pub fn set_background(&mut self, background: Option<&str>) {
        self.state.background = background.map(str::to_string);
        self.changed();
    }

    /// Resizes the logical grid.
    ///
    /// Returns `false`, leaving everything untouched and notifying no one,
    /// when the grid would not fit the layout.
    pub fn set_size(&mut self, x: u32, y: u32) -> bool {
        let size = SizePx::new(x, y);
        let Some(geometry) = Geometry::compute(size, &self.layout) else {
            tracing::debug!(x, y, "resize rejected");
            return false;
        };

        self.state.size = size;
        self.geometry = geometry;
        self.stack.reapply(Pivot::of_grid(size));
        self.changed();
        true
    }

    /// Resizes both axes to `floor(factor * n + delta)`.
    pub fn adjust_size(&mut self, delta: i32, factor: f64) -> bool {
        let scale = |n: u32| {
            let v = (factor * f64::from(n) + f64::from(delta)).floor();
            (1.0..=f64::from(u32::MAX)).contains(&v).then_some(v as u32)
        };
        match (scale(self.state.size.width), scale(self.state.size.height)) {
            (Some(x), Some(y)) => self.set_size(x, y),
            _ => false,
        }
    }

    pub fn set_trace(&mut self, enabled: bool) {
        self.state.just_trace = enabled;
        self.changed();
    }

    pub fn set_translucent(&mut self, enabled: bool) {
        self.state.translucent = enabled;
        self.changed();
    }

    /// Enables or disables a rotation by `degrees` about the grid center.
    pub fn apply_rotation(&mut self, degrees: i32, enabled: bool) {
        self.stack.toggle_rotation(degrees, enabled);
        self.state.rotations = self.stack.rotations().to_vec();
        self.changed();
    }

    /// Enables or disables one of the four mirrorings.
    ///
    /// An index outside `0..=3` is an error and changes nothing.
    pub fn apply_mirror(&mut self, index: usize, enabled: bool) -> Result<(), EditorError> {
        self.stack.toggle_mirror(index, enabled)?;
        self.state.mirrors = self.stack.mirrors();
        self.changed();
        Ok(())
    }

    /// Replaces the whole state from a serialized configuration.
    ///
    /// Listeners are notified once. A grid size that does not fit the layout
    /// is ignored and the current size kept.
    pub fn set_config(&mut self, config: IconConfig) -> Result<(), EditorError> {
        let mut state = IconState::from_config(&config)?;

        match Geometry::compute(state.size, &self.layout) {
            Some(geometry) => self.geometry = geometry,
            None => {
                tracing::warn!(
                    x = state.size.width,
                    y = state.size.height,
                    "configured size does not fit, keeping the current size"
                );
                state.size = self.state.size;
            }
        }

        let mut stack = TransformStack::new(Pivot::of_grid(state.size));
        stack.set_rotations(&state.rotations);
        stack.set_mirrors(state.mirrors);

        self.state = state;
        self.stack = stack;
        self.changed();
        Ok(())
    }

    /// Parses, validates and applies a JSON configuration.
    pub fn set_config_json(&mut self, json: &str) -> Result<(), EditorError> {
        let config = IconConfig::from_json(json)?;
        self.set_config(config)
    }

    /// Updates the width the host can offer and refits the current grid.
    ///
    /// Returns `false` if the current grid no longer fits; the previous
    /// geometry is then kept. The state itself does not change, so listeners
    /// are not notified.
    pub fn set_available_width(&mut self, available_width: u32) -> bool {
        self.layout = self.layout.with_available_width(available_width);
        match Geometry::compute(self.state.size, &self.layout) {
            Some(geometry) => {
                if geometry != self.geometry {
                    self.geometry = geometry;
                    self.schedule();
                }
                true
            }
            None => {
                tracing::debug!(available_width, "grid does not fit the new width");
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------------

    /// Registers a listener called with a snapshot after every mutation.
    pub fn add_listener(&mut self, listener: impl FnMut(&IconConfig) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Detaches a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    /// Sends the current state to every listener without mutating anything.
    pub fn notify_now(&mut self) {
        self.notify();
    }

    // ------------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------------

    /// Runs the compositor if a repaint is pending.
    ///
    /// Returns `Ok(false)` when there was nothing to do. The pending flag is
    /// cleared before rendering, so a failed pass is not retried until the
    /// next mutation.
    pub fn frame(&mut self) -> Result<bool, EditorError> {
        if !self.pending {
            return Ok(false);
        }
        self.pending = false;

        let scene = Scene {
            state: &self.state,
            transforms: self.stack.transforms(),
            geometry: self.geometry,
        };
        let buffer = self.compositor.render(&scene)?;
        tracing::debug!(
            x = self.state.size.width,
            y = self.state.size.height,
            pitch = self.geometry.pitch,
            "frame rendered"
        );
        self.last_frame = Some(buffer);
        Ok(true)
    }

    /// Output of the most recent successful frame.
    pub fn last_frame(&self) -> Option<&PresentationBuffer> {
        self.last_frame.as_ref()
    }

    /// Whether a repaint has been requested and not yet run.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn state(&self) -> &IconState {
        &self.state
    }

    /// Snapshot of the state in wire format.
    pub fn config(&self) -> IconConfig {
        self.state.to_config()
    }

    pub fn size(&self) -> SizePx {
        self.state.size
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn pivot(&self) -> Pivot {
        self.stack.pivot()
    }

    pub fn transforms(&self) -> &TransformSet {
        self.stack.transforms()
    }

    pub fn has_rotation(&self, degrees: i32) -> bool {
        self.stack.has_rotation(degrees)
    }

    pub fn has_mirror(&self, index: usize) -> bool {
        self.stack.has_mirror(index)
    }

    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    pub fn frames(&self) -> &S {
        &self.frames
    }

    /// The current icon as SVG markup.
    pub fn export_svg(&self) -> String {
        export::export_svg(&self.config(), self.transforms())
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn changed(&mut self) {
        self.notify();
        self.schedule();
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let config = self.state.to_config();
        for (_, listener) in &mut self.listeners {
            listener(&config);
        }
    }

    fn schedule(&mut self) {
        if self.pending {
            return;
        }
        self.pending = true;
        self.frames.request_frame();
        tracing::trace!("frame requested");
    }
}

impl<C: Compositor, S: FrameScheduler> Configurable for IconEditor<C, S> {
    fn apply_config(&mut self, config: IconConfig) -> Result<(), EditorError> {
        self.set_config(config)
    }

    fn export_config(&self) -> IconConfig {
        self.config()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, RenderError};
    use crate::state::ItemConfig;
    use crate::symmetry::Transform;
    use image::RgbaImage;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records the path of every scene it is asked to render.
    #[derive(Default)]
    struct Recording {
        passes: Vec<String>,
    }

    impl Compositor for Recording {
        fn render(&mut self, scene: &Scene<'_>) -> Result<PresentationBuffer, RenderError> {
            self.passes.push(scene.state.path.clone());
            Ok(PresentationBuffer {
                image: RgbaImage::new(1, 1),
                geometry: scene.geometry,
                grid: scene.state.size,
            })
        }
    }

    fn layout() -> LayoutConfig {
        LayoutConfig::default().with_available_width(320)
    }

    /// A recording editor with its initial frame already flushed.
    fn editor() -> IconEditor<Recording, ManualFrames> {
        let mut editor =
            IconEditor::with_parts(Recording::default(), ManualFrames::new(), layout()).unwrap();
        assert!(editor.frame().unwrap());
        editor
    }

    fn listen(editor: &mut IconEditor<Recording, ManualFrames>) -> Rc<RefCell<Vec<IconConfig>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        editor.add_listener(move |config| sink.borrow_mut().push(config.clone()));
        seen
    }

    fn config(x: u32, y: u32) -> IconConfig {
        IconConfig {
            x,
            y,
            background: Some("white".into()),
            just_trace: true,
            translucent: true,
            rotations: vec![90, 90],
            mirrors: [false, true, false, false],
            items: vec![ItemConfig {
                path: "M1 1h6v6z".into(),
                line_width: 2.0,
                stroke_style: "red".into(),
                fill_style: "blue".into(),
            }],
        }
    }

    #[test]
    fn construction_schedules_the_first_paint() {
        let editor =
            IconEditor::with_parts(Recording::default(), ManualFrames::new(), layout()).unwrap();
        assert!(editor.is_pending());
        assert_eq!(editor.frames().requested(), 1);
        assert_eq!(editor.geometry(), Geometry { cell: 18, border: 2, pitch: 20 });
        assert_eq!(editor.pivot(), Pivot::new(8.0, 8.0));
    }

    #[test]
    fn construction_fails_without_room() {
        let narrow = LayoutConfig::default().with_available_width(16);
        assert!(matches!(
            IconEditor::with_parts(Recording::default(), ManualFrames::new(), narrow),
            Err(EditorError::NoGeometry { x: 16, y: 16, available_width: 16 })
        ));
    }

    #[test]
    fn mutations_coalesce_into_one_pass() {
        let mut editor = editor();
        let seen = listen(&mut editor);

        editor.set_path("M0 0L1 1");
        editor.set_path("M0 0L2 2");
        editor.set_path("M0 0L3 3");

        assert_eq!(editor.frames().requested(), 2);
        let paths: Vec<_> = seen.borrow().iter().map(|c| c.items[0].path.clone()).collect();
        assert_eq!(paths, ["M0 0L1 1", "M0 0L2 2", "M0 0L3 3"]);

        assert!(editor.frame().unwrap());
        assert!(!editor.frame().unwrap());
        assert_eq!(editor.compositor().passes, ["", "M0 0L3 3"]);
    }

    #[test]
    fn every_mutator_notifies() {
        let mut editor = editor();
        let seen = listen(&mut editor);

        assert!(editor.set_line_width(2.5));
        editor.set_stroke_style("red");
        editor.set_fill_style("");
        editor.set_background(Some("white"));
        editor.set_trace(true);
        editor.set_translucent(true);
        editor.apply_rotation(90, true);
        editor.apply_mirror(3, true).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 8);
        let last = seen.last().unwrap();
        assert_eq!(last.items[0].line_width, 2.5);
        assert_eq!(last.items[0].stroke_style, "red");
        assert_eq!(last.background.as_deref(), Some("white"));
        assert!(last.just_trace && last.translucent);
        assert_eq!(last.rotations, [90]);
        assert_eq!(last.mirrors, [false, false, false, true]);
    }

    #[rstest]
    #[case(-2.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn invalid_line_width_is_rejected(#[case] width: f64) {
        let mut editor = editor();
        let seen = listen(&mut editor);

        assert!(!editor.set_line_width(width));
        assert_eq!(editor.state().line_width, 1.0);
        assert!(seen.borrow().is_empty());
        assert!(!editor.is_pending());
    }

    #[test]
    fn every_snapshot_can_be_loaded_back() {
        let mut editor = editor();
        let seen = listen(&mut editor);

        editor.set_line_width(0.0);
        editor.set_line_width(-2.0);
        editor.set_line_width(f64::NAN);
        editor.set_stroke_style("rgba(1, 2, 3, 0.123)");
        editor.set_background(Some("white"));
        editor.apply_rotation(90, true);
        editor.apply_mirror(2, true).unwrap();
        assert!(editor.set_size(20, 12));

        let snapshots = seen.borrow().clone();
        assert_eq!(snapshots.len(), 6);
        for snapshot in snapshots {
            let json = snapshot.to_json().unwrap();
            let mut other = self::editor();
            other.set_config_json(&json).unwrap();
            assert_eq!(other.config(), snapshot);
        }
    }

    #[test]
    fn rejected_resize_changes_nothing() {
        let mut editor = editor();
        let seen = listen(&mut editor);
        let geometry = editor.geometry();

        assert!(!editor.set_size(200, 200));
        assert!(!editor.set_size(0, 16));

        assert_eq!(editor.size(), SizePx::new(16, 16));
        assert_eq!(editor.geometry(), geometry);
        assert_eq!(editor.pivot(), Pivot::new(8.0, 8.0));
        assert!(seen.borrow().is_empty());
        assert!(!editor.is_pending());
    }

    #[test]
    fn resize_moves_the_pivot() {
        let mut editor = editor();
        editor.apply_rotation(90, true);

        assert!(editor.set_size(32, 32));
        assert_eq!(editor.geometry(), Geometry { cell: 9, border: 1, pitch: 10 });
        assert_eq!(editor.pivot(), Pivot::new(16.0, 16.0));
        assert_eq!(
            editor.transforms().as_slice(),
            &[Transform::new(0.0, 1.0, -1.0, 0.0, 32.0, 0.0)]
        );
    }

    #[test]
    fn adjust_size_steps() {
        let mut editor = editor();
        assert!(editor.adjust_size(1, 1.0));
        assert_eq!(editor.size(), SizePx::new(17, 17));
        assert!(editor.adjust_size(-1, 1.0));
        assert!(editor.adjust_size(0, 2.0));
        assert_eq!(editor.size(), SizePx::new(32, 32));
        assert!(editor.adjust_size(0, 0.5));
        assert_eq!(editor.size(), SizePx::new(16, 16));
        assert!(!editor.adjust_size(-16, 1.0));
        assert_eq!(editor.size(), SizePx::new(16, 16));
    }

    #[test]
    fn rotation_toggles() {
        let mut editor = editor();
        editor.apply_rotation(90, true);
        editor.apply_rotation(90, true);
        assert_eq!(editor.transforms().len(), 1);
        assert!(editor.has_rotation(90));

        editor.apply_rotation(45, false);
        assert_eq!(editor.transforms().len(), 1);

        editor.apply_rotation(90, false);
        assert!(editor.transforms().is_empty());
        assert!(!editor.has_rotation(90));
    }

    #[test]
    fn invalid_mirror_is_rejected() {
        let mut editor = editor();
        let seen = listen(&mut editor);

        assert!(matches!(
            editor.apply_mirror(4, true),
            Err(EditorError::InvalidMirror(4))
        ));
        assert!(seen.borrow().is_empty());
        assert!(!editor.has_mirror(4));
        assert!(editor.transforms().is_empty());
    }

    #[test]
    fn set_config_replaces_everything_and_notifies_once() {
        let mut editor = editor();
        let seen = listen(&mut editor);

        editor.set_config(config(8, 8)).unwrap();

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(editor.size(), SizePx::new(8, 8));
        assert_eq!(editor.pivot(), Pivot::new(4.0, 4.0));
        assert_eq!(editor.geometry().pitch, 30);
        assert_eq!(editor.state().rotations, [90]);
        assert!(editor.has_mirror(1));
        assert_eq!(editor.transforms().len(), 2);
        assert_eq!(editor.state().path, "M1 1h6v6z");
    }

    #[test]
    fn set_config_keeps_size_that_does_not_fit() {
        let mut editor = editor();
        editor.set_config(config(500, 500)).unwrap();
        assert_eq!(editor.size(), SizePx::new(16, 16));
        assert_eq!(editor.pivot(), Pivot::new(8.0, 8.0));
        assert_eq!(editor.state().path, "M1 1h6v6z");
    }

    #[test]
    fn set_config_rejects_invalid_input() {
        let mut editor = editor();
        let seen = listen(&mut editor);

        let mut bad = config(8, 8);
        bad.items.clear();
        assert!(matches!(
            editor.set_config(bad),
            Err(EditorError::Config(ConfigError::NoItems))
        ));
        assert!(matches!(editor.set_config_json("{"), Err(EditorError::Json(_))));
        assert!(seen.borrow().is_empty());
        assert_eq!(editor.size(), SizePx::new(16, 16));
    }

    #[test]
    fn set_config_json_roundtrip() {
        let mut editor = editor();
        let json = config(12, 10).to_json().unwrap();
        editor.set_config_json(&json).unwrap();

        let mut expected = config(12, 10);
        expected.rotations = vec![90];
        assert_eq!(editor.config(), expected);
    }

    #[test]
    fn configurable_roundtrip() {
        let mut editor = editor();
        editor.apply_config(config(8, 8)).unwrap();
        let exported = editor.export_config();

        let mut other = self::editor();
        other.apply_config(exported.clone()).unwrap();
        assert_eq!(other.export_config(), exported);
    }

    #[test]
    fn listeners_can_be_removed() {
        let mut editor = editor();
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let id = editor.add_listener(move |_| *sink.borrow_mut() += 1);

        editor.notify_now();
        editor.set_trace(true);
        assert!(editor.remove_listener(id));
        assert!(!editor.remove_listener(id));
        editor.set_trace(false);

        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn available_width_refits_the_grid() {
        let mut editor = editor();
        assert!(editor.set_available_width(161));
        assert_eq!(editor.geometry(), Geometry { cell: 9, border: 1, pitch: 10 });
        assert!(editor.is_pending());

        assert!(!editor.set_available_width(20));
        assert_eq!(editor.geometry().pitch, 10);
    }

    #[test]
    fn export_uses_current_transforms() {
        let mut editor = editor();
        editor.set_path("M1 1L4 4");
        editor.apply_rotation(180, true);
        let svg = editor.export_svg();
        assert!(svg.contains("d=\"M1 1L4 4\""));
        assert!(svg.contains("matrix(-1,0,0,-1,16,16)"));
    }

    #[test]
    fn real_compositor_paints_frames() {
        let mut editor = IconEditor::new(layout()).unwrap();
        editor.set_path("M0 0h16v16h-16z");
        assert!(editor.frame().unwrap());

        let frame = editor.last_frame().unwrap();
        assert_eq!(frame.image.dimensions(), (322, 322));
        assert_eq!(frame.grid, SizePx::new(16, 16));
        // Cell interior of a filled black pixel.
        assert_eq!(frame.image.get_pixel(50, 50).0, [0, 0, 0, 255]);
    }

    #[test]
    fn failed_frame_clears_pending() {
        let mut editor = IconEditor::new(layout()).unwrap();
        editor.set_path("M0 0 L nonsense");

        assert!(matches!(
            editor.frame(),
            Err(EditorError::Render(RenderError::InvalidPath(_)))
        ));
        assert!(!editor.is_pending());
        assert!(editor.last_frame().is_none());
    }
}
