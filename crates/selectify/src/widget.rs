//! The `Selectify` combobox widget.

use crate::config::{SelectifyConfig, StyleOverrides};
use crate::controller::Controller;
use crate::dismiss::OverlaySurface;
use crate::keyboard::{ScrollBehavior, ScrollRequest};
use crate::message::{RowSelectRequested, SelectifyMessage};
use crate::option::{OptionGroup, SelectOption};
use crate::placement::{InputMeasure, Measurement, Placement, PositionOffset, ESTIMATED_PANEL_HEIGHT};
use crate::row::{build_rows, OptionRenderProps, RenderOption, Row, RowKind, SelectHandle};
use selectify_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, trace, warn};

const INPUT_HEIGHT: f32 = 32.0;
const ITEM_HEIGHT: f32 = 32.0;
const GROUP_LABEL_HEIGHT: f32 = 28.0;
const DEFAULT_MIN_WIDTH: f32 = 200.0;
const PADDING: f32 = 8.0;
const CHEVRON_WIDTH: f32 = 24.0;
const CHECKBOX_SIZE: f32 = 16.0;
const TOOLTIP_OFFSET: f32 = 16.0;
/// Time constant of the smooth scroll animation.
const SMOOTH_SCROLL_MS: f32 = 120.0;
const NO_RESULTS: &str = "No results found";

/// Resolved colors.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Palette {
    root_background: Option<Color>,
    root_border: Option<Color>,
    input_background: Color,
    input_border: Color,
    focus_border: Color,
    text: Color,
    placeholder: Color,
    disabled: Color,
    panel_background: Color,
    panel_border: Color,
    panel_text: Color,
    highlight: Color,
    selected: Color,
    hover: Color,
    group_label_background: Color,
    group_label_text: Color,
    accent: Color,
    tooltip_background: Color,
    tooltip_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            root_background: None,
            root_border: None,
            input_background: Color::WHITE,
            input_border: Color::new(0.8, 0.8, 0.8, 1.0),
            focus_border: Color::new(0.0, 0.47, 0.83, 1.0),
            text: Color::BLACK,
            placeholder: Color::new(0.6, 0.6, 0.6, 1.0),
            disabled: Color::new(0.7, 0.7, 0.7, 1.0),
            panel_background: Color::WHITE,
            panel_border: Color::new(0.8, 0.8, 0.8, 1.0),
            panel_text: Color::BLACK,
            highlight: Color::new(0.93, 0.93, 0.93, 1.0),
            selected: Color::new(0.9, 0.95, 1.0, 1.0),
            hover: Color::new(0.96, 0.96, 0.96, 1.0),
            group_label_background: Color::new(0.98, 0.98, 0.98, 1.0),
            group_label_text: Color::new(0.4, 0.4, 0.4, 1.0),
            accent: Color::new(0.0, 0.47, 0.83, 1.0),
            tooltip_background: Color::new(0.2, 0.2, 0.2, 0.95),
            tooltip_text: Color::WHITE,
        }
    }
}

impl Palette {
    fn from_styles(styles: &StyleOverrides) -> Self {
        let base = Self::default();
        Self {
            root_background: styles.root.background_color(),
            root_border: styles.root.border_color(),
            input_background: styles.input.background_color().unwrap_or(base.input_background),
            input_border: styles.input.border_color().unwrap_or(base.input_border),
            text: styles.input.text_color().unwrap_or(base.text),
            panel_background: styles.call_out.background_color().unwrap_or(base.panel_background),
            panel_border: styles.call_out.border_color().unwrap_or(base.panel_border),
            panel_text: styles.call_out.text_color().unwrap_or(base.panel_text),
            group_label_background: styles
                .group_label
                .background_color()
                .unwrap_or(base.group_label_background),
            group_label_text: styles.group_label.text_color().unwrap_or(base.group_label_text),
            ..base
        }
    }
}

/// Single- or multi-select combobox.
///
/// A text input that opens a panel of options. Typing filters the list;
/// arrows move a highlight that skips disabled entries; Enter or Space
/// commits; Escape or a press outside closes. Options may be grouped under
/// header rows.
///
/// `event` returns a boxed `Vec<SelectifyMessage>` when handling produced
/// messages. Deferred work (refocus after a multi-select click, initial
/// highlight on open) runs on the next `layout`.
///
/// ```
/// use selectify::{SelectOption, Selectify};
///
/// let select = Selectify::new()
///     .options([SelectOption::new("1", "Option 1"), SelectOption::new("2", "Option 2")])
///     .placeholder("Pick one");
/// assert!(!select.is_open());
/// ```
pub struct Selectify {
    controller: Controller,
    placeholder: String,
    class_name: String,
    show_tooltip: bool,
    styles: StyleOverrides,
    palette: Palette,
    render_option: Option<RenderOption>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
    overlays: Vec<OverlaySurface>,
    /// Input bounds as assigned by layout
    bounds: Rect,
    viewport: Option<Size>,
    rows: Vec<Row>,
    row_content: Vec<Box<dyn Widget>>,
    scroll_offset: f32,
    scroll_target: Option<f32>,
    pointer: Option<Point>,
    hovered_row: Option<usize>,
    suppress_text: bool,
}

impl std::fmt::Debug for Selectify {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selectify")
            .field("controller", &self.controller)
            .field("placeholder", &self.placeholder)
            .field("bounds", &self.bounds)
            .field("rows", &self.rows.len())
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

impl Default for Selectify {
    fn default() -> Self {
        Self::new()
    }
}

impl Selectify {
    /// Create an empty single-select combobox.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Controller::new(false),
            placeholder: String::new(),
            class_name: String::new(),
            show_tooltip: false,
            styles: StyleOverrides::default(),
            palette: Palette::default(),
            render_option: None,
            test_id_value: None,
            accessible_name_value: None,
            overlays: Vec::new(),
            bounds: Rect::default(),
            viewport: None,
            rows: Vec::new(),
            row_content: Vec::new(),
            scroll_offset: 0.0,
            scroll_target: None,
            pointer: None,
            hovered_row: None,
            suppress_text: false,
        }
    }

    /// Build from a loaded configuration.
    #[must_use]
    pub fn from_config(config: SelectifyConfig) -> Self {
        let mut select = Self::new()
            .multiple(config.multiple)
            .options(config.options)
            .groups(config.groups)
            .disabled(config.disabled)
            .position_offset(config.position_offset)
            .styles(config.styles)
            .show_tooltip(config.show_tooltip)
            .class_name(config.class_name);
        if let Some(placeholder) = config.placeholder {
            select = select.placeholder(placeholder);
        }
        select.controller.set_selected_keys(config.selected_keys);
        select
    }

    // === Builder ===

    /// Add an option.
    #[must_use]
    pub fn option(mut self, option: SelectOption) -> Self {
        let mut options = self.controller.options().to_vec();
        options.push(option);
        self.controller.set_options(options);
        self
    }

    /// Set the flat options.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.controller.set_options(options.into_iter().collect());
        self
    }

    /// Add a group.
    #[must_use]
    pub fn group(mut self, group: OptionGroup) -> Self {
        let mut groups = self.controller.groups().to_vec();
        groups.push(group);
        self.controller.set_groups(groups);
        self
    }

    /// Set the groups.
    #[must_use]
    pub fn groups(mut self, groups: impl IntoIterator<Item = OptionGroup>) -> Self {
        self.controller.set_groups(groups.into_iter().collect());
        self
    }

    /// Control the selection externally.
    #[must_use]
    pub fn selected_keys(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.controller
            .set_selected_keys(Some(keys.into_iter().map(Into::into).collect()));
        self
    }

    /// Callback invoked on every toggle.
    #[must_use]
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Event, &SelectOption) + Send + Sync + 'static,
    {
        self.controller.set_on_change(Some(Arc::new(callback)));
        self
    }

    /// Set disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.controller.set_disabled(disabled);
        self
    }

    /// Text shown when nothing is selected.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Panel placement preference.
    #[must_use]
    pub fn position_offset(mut self, offset: PositionOffset) -> Self {
        self.controller.set_position_offset(offset);
        self
    }

    /// Region style overrides. Unparseable colors are ignored.
    #[must_use]
    pub fn styles(mut self, styles: StyleOverrides) -> Self {
        if let Err(err) = styles.validate() {
            warn!(%err, "ignoring invalid style color");
        }
        self.palette = Palette::from_styles(&styles);
        self.styles = styles;
        self
    }

    /// Show the hovered option's text in a tooltip.
    #[must_use]
    pub const fn show_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    /// Extra class name reported to hosts.
    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Allow several options to be selected.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.controller.set_multiple(multiple);
        self
    }

    /// Custom row content.
    #[must_use]
    pub fn render_option<F>(mut self, render: F) -> Self
    where
        F: Fn(OptionRenderProps) -> Box<dyn Widget> + Send + Sync + 'static,
    {
        self.render_option = Some(Arc::new(render));
        self
    }

    /// Register an overlay surface the widget is hosted in.
    #[must_use]
    pub fn overlay(mut self, surface: OverlaySurface) -> Self {
        self.overlays.push(surface);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    // === Runtime updates ===

    /// Replace the externally controlled keys.
    pub fn set_selected_keys(&mut self, keys: Option<Vec<String>>) {
        self.controller.set_selected_keys(keys);
        self.sync();
    }

    /// Replace the flat options.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.controller.set_options(options);
        self.sync();
    }

    /// Replace the groups.
    pub fn set_groups(&mut self, groups: Vec<OptionGroup>) {
        self.controller.set_groups(groups);
        self.sync();
    }

    /// Enable or disable interaction.
    ///
    /// Disabling an open dropdown closes it; the resulting
    /// [`CloseReason::Disabled`](crate::CloseReason::Disabled) message is
    /// returned here since `event` ignores input while disabled.
    pub fn set_disabled(&mut self, disabled: bool) -> Vec<SelectifyMessage> {
        self.controller.set_disabled(disabled);
        self.sync();
        self.controller.take_messages()
    }

    /// Replace the registered overlay surfaces.
    pub fn set_overlays(&mut self, overlays: Vec<OverlaySurface>) {
        self.overlays = overlays;
    }

    // === Queries ===

    /// Interaction state.
    #[must_use]
    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Whether the input has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.controller.is_focused()
    }

    /// Selected options in display order.
    #[must_use]
    pub fn selected(&self) -> &[SelectOption] {
        self.controller.selection().selected()
    }

    /// Resolved panel side.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.controller.placement()
    }

    /// Class name reported to hosts.
    #[must_use]
    pub fn get_class_name(&self) -> &str {
        &self.class_name
    }

    /// Region style overrides.
    #[must_use]
    pub const fn get_styles(&self) -> &StyleOverrides {
        &self.styles
    }

    /// Input bounds.
    #[must_use]
    pub const fn input_rect(&self) -> Rect {
        self.bounds
    }

    /// Panel bounds while open.
    #[must_use]
    pub fn panel_rect(&self) -> Option<Rect> {
        if !self.controller.is_open() {
            return None;
        }
        let height = self.content_height().min(self.max_panel_height());
        let y = match self.controller.placement() {
            Placement::Bottom => self.bounds.bottom(),
            Placement::Top => self.bounds.top() - height,
        };
        Some(Rect::new(self.bounds.x, y, self.bounds.width, height))
    }

    /// On-screen bounds of the row for `key`, if it is in the panel.
    #[must_use]
    pub fn row_rect(&self, key: &str) -> Option<Rect> {
        let row = self
            .rows
            .iter()
            .find(|r| r.option().is_some_and(|o| o.key == key))?;
        Some(self.screen_rect(row))
    }

    /// Current vertical scroll of the panel content.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Whether a smooth scroll is in progress.
    #[must_use]
    pub const fn is_scrolling(&self) -> bool {
        self.scroll_target.is_some()
    }

    // === Geometry ===

    fn font_size(&self) -> f32 {
        self.styles.input.font_size.unwrap_or(14.0)
    }

    fn min_width(&self) -> f32 {
        self.styles
            .input
            .min_width
            .or(self.styles.root.min_width)
            .unwrap_or(DEFAULT_MIN_WIDTH)
    }

    fn max_panel_height(&self) -> f32 {
        self.styles
            .call_out
            .max_height
            .unwrap_or(ESTIMATED_PANEL_HEIGHT)
    }

    fn content_height(&self) -> f32 {
        self.rows.last().map_or(0.0, Row::end)
    }

    fn max_scroll(&self) -> f32 {
        let viewport = self.content_height().min(self.max_panel_height());
        (self.content_height() - viewport).max(0.0)
    }

    fn root_rect(&self) -> Rect {
        self.panel_rect()
            .map_or(self.bounds, |panel| self.bounds.union(&panel))
    }

    fn screen_rect(&self, row: &Row) -> Rect {
        let top = self.panel_rect().map_or(self.bounds.bottom(), |p| p.y);
        Rect::new(
            self.bounds.x,
            top + row.offset - self.scroll_offset,
            self.bounds.width,
            row.height,
        )
    }

    fn row_at(&self, point: &Point) -> Option<usize> {
        let panel = self.panel_rect()?;
        if !panel.contains_point(point) {
            return None;
        }
        let y = point.y - panel.y + self.scroll_offset;
        self.rows.iter().position(|r| y >= r.offset && y < r.end())
    }

    // === State sync ===

    /// Rebuild rows and apply pending scroll requests after a state change.
    fn sync(&mut self) {
        if self.controller.is_open() {
            self.rows = build_rows(self.controller.view(), ITEM_HEIGHT, GROUP_LABEL_HEIGHT);
            self.rebuild_row_content();
            while let Some(request) = self.controller.take_scroll_request() {
                self.scroll_into_view(&request);
            }
            self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
            self.hovered_row = self.pointer.and_then(|p| self.row_at(&p));
        } else {
            self.rows.clear();
            self.row_content.clear();
            self.scroll_offset = 0.0;
            self.scroll_target = None;
            self.hovered_row = None;
        }
    }

    fn rebuild_row_content(&mut self) {
        self.row_content.clear();
        let Some(render) = self.render_option.clone() else {
            return;
        };
        let selection = self.controller.selection();
        for index in 0..self.rows.len() {
            let Some(option) = self.rows[index].option().cloned() else {
                continue;
            };
            let props = OptionRenderProps {
                selected: selection.contains(&option.key),
                highlighted: self.controller.is_highlighted(&option.key),
                disabled: option.disabled,
                on_select: SelectHandle::new(option.key.clone()),
                option,
            };
            let mut content = render(props);
            content.layout(self.screen_rect(&self.rows[index]));
            self.rows[index].content = Some(self.row_content.len());
            self.row_content.push(content);
        }
    }

    fn scroll_into_view(&mut self, request: &ScrollRequest) {
        let Some(row) = self
            .rows
            .iter()
            .find(|r| r.option().is_some_and(|o| o.key == request.key))
        else {
            trace!(key = %request.key, "scroll request for row not in panel");
            return;
        };
        let viewport = self.content_height().min(self.max_panel_height());
        let current = self.scroll_target.unwrap_or(self.scroll_offset);
        let target = if row.offset < current {
            row.offset
        } else if row.end() > current + viewport {
            row.end() - viewport
        } else {
            return;
        };

        match request.behavior {
            ScrollBehavior::Instant => {
                self.scroll_offset = target;
                self.scroll_target = None;
            }
            ScrollBehavior::Smooth => self.scroll_target = Some(target),
        }
        trace!(key = %request.key, target, behavior = ?request.behavior, "scrolling row into view");
    }

    fn advance_scroll(&mut self, delta_ms: f32) {
        let Some(target) = self.scroll_target else {
            return;
        };
        let t = (delta_ms / SMOOTH_SCROLL_MS).clamp(0.0, 1.0);
        let next = (target - self.scroll_offset).mul_add(t, self.scroll_offset);
        if (target - next).abs() < 0.5 {
            self.scroll_offset = target;
            self.scroll_target = None;
        } else {
            self.scroll_offset = next;
        }
    }

    // === Event handling ===

    fn pointer_down(&mut self, event: &Event, position: Point, button: MouseButton) {
        if self.bounds.contains_point(&position) {
            if button == MouseButton::Left {
                let measurement = self.measure_input();
                self.controller.input_pressed(&measurement);
            }
            return;
        }

        if let Some(index) = self.row_at(&position) {
            if button == MouseButton::Left {
                self.press_row(event, index);
            }
            return;
        }

        let root = self.root_rect();
        self.controller
            .pointer_down_elsewhere(&position, root, self.bounds, &self.overlays);
    }

    fn press_row(&mut self, event: &Event, index: usize) {
        let Some(key) = self.rows[index].option().map(|o| o.key.clone()) else {
            return;
        };
        let requested = self.rows[index]
            .content
            .and_then(|c| self.row_content.get_mut(c))
            .and_then(|content| content.event(event))
            .and_then(|msg| msg.downcast::<RowSelectRequested>().ok())
            .map(|req| req.key);

        debug!(key = %requested.as_deref().unwrap_or(&key), "row pressed");
        self.controller
            .commit_click(event, requested.as_deref().unwrap_or(&key));
    }

    fn key_down(&mut self, event: &Event, key: Key) {
        if !self.controller.is_focused() {
            return;
        }
        self.suppress_text = false;
        if key == Key::Backspace {
            let measurement = self.measure_input();
            self.controller.delete_backward(&measurement);
            return;
        }
        let outcome = self.controller.key_down(event, key);
        self.suppress_text = outcome.prevents_default() && key.produces_text();
    }

    fn text_input(&mut self, text: &str) {
        if !self.controller.is_focused() {
            return;
        }
        if std::mem::take(&mut self.suppress_text) {
            trace!(text, "text input suppressed by handled key");
            return;
        }
        let measurement = self.measure_input();
        self.controller.insert_text(text, &measurement);
    }

    fn scrolled(&mut self, delta_y: f32) {
        if !self.controller.is_open() {
            return;
        }
        let over_panel = self
            .pointer
            .zip(self.panel_rect())
            .is_some_and(|(p, panel)| panel.contains_point(&p));
        if over_panel {
            self.scroll_target = None;
            self.scroll_offset = (self.scroll_offset + delta_y).clamp(0.0, self.max_scroll());
        } else {
            let measurement = self.measure_input();
            self.controller.reposition(&measurement);
        }
    }

    // === Painting ===

    fn text_style(&self, color: Color) -> TextStyle {
        TextStyle {
            size: self.font_size(),
            color,
            weight: FontWeight::Normal,
        }
    }

    fn paint_input(&self, canvas: &mut dyn Canvas) {
        let disabled = self.controller.is_disabled();
        let p = &self.palette;

        canvas.fill_rect(
            self.bounds,
            if disabled { p.disabled.with_alpha(0.2) } else { p.input_background },
        );
        let border = if self.controller.is_focused() && !disabled {
            p.focus_border
        } else {
            p.input_border
        };
        canvas.stroke_rect(self.bounds, border, 1.0);

        let value = self.controller.input_value();
        let (text, color) = if value.is_empty() {
            let placeholder = self.controller.input_placeholder(&self.placeholder);
            let color = if self.controller.selection().is_empty() {
                p.placeholder
            } else {
                p.text
            };
            (placeholder, color)
        } else {
            (value.to_string(), p.text)
        };
        let color = if disabled { p.disabled } else { color };

        let text_area = Rect::new(
            self.bounds.x + PADDING,
            self.bounds.y,
            (self.bounds.width - PADDING - CHEVRON_WIDTH).max(0.0),
            self.bounds.height,
        );
        if !text.is_empty() {
            canvas.push_clip(text_area);
            canvas.draw_text(
                &text,
                Point::new(text_area.x, self.bounds.y + (self.bounds.height - self.font_size()) / 2.0),
                &self.text_style(color),
            );
            canvas.pop_clip();
        }

        // Chevron
        let cx = self.bounds.right() - CHEVRON_WIDTH / 2.0;
        let cy = self.bounds.y + self.bounds.height / 2.0;
        canvas.draw_path(
            &[
                Point::new(cx - 4.0, cy - 2.0),
                Point::new(cx, cy + 2.0),
                Point::new(cx + 4.0, cy - 2.0),
            ],
            if disabled { p.disabled } else { p.text },
            1.5,
        );
    }

    fn paint_panel(&self, canvas: &mut dyn Canvas, panel: Rect) {
        let p = &self.palette;
        canvas.fill_rect(panel, p.panel_background);
        canvas.stroke_rect(panel, p.panel_border, 1.0);
        canvas.push_clip(panel);

        for (index, row) in self.rows.iter().enumerate() {
            let rect = self.screen_rect(row);
            if !rect.intersects(&panel) {
                continue;
            }
            match &row.kind {
                RowKind::GroupLabel(label) => {
                    canvas.fill_rect(rect, p.group_label_background);
                    let style = TextStyle {
                        size: self.styles.group_label.font_size.unwrap_or(12.0),
                        color: p.group_label_text,
                        weight: FontWeight::Semibold,
                    };
                    canvas.draw_text(
                        label,
                        Point::new(rect.x + PADDING, rect.y + (rect.height - style.size) / 2.0),
                        &style,
                    );
                }
                RowKind::Empty => {
                    canvas.draw_text(
                        NO_RESULTS,
                        Point::new(rect.x + PADDING, rect.y + (rect.height - self.font_size()) / 2.0),
                        &self.text_style(p.placeholder),
                    );
                }
                RowKind::Option(option) => self.paint_option(canvas, index, row, option, rect),
            }
        }

        canvas.pop_clip();
    }

    fn paint_option(
        &self,
        canvas: &mut dyn Canvas,
        index: usize,
        row: &Row,
        option: &SelectOption,
        rect: Rect,
    ) {
        let p = &self.palette;
        let selected = self.controller.selection().contains(&option.key);

        let background = if self.controller.is_highlighted(&option.key) {
            Some(p.highlight)
        } else if selected && !self.controller.is_multiple() {
            Some(p.selected)
        } else if self.hovered_row == Some(index) && !option.disabled {
            Some(p.hover)
        } else {
            None
        };
        if let Some(background) = background {
            canvas.fill_rect(rect, background);
        }

        if let Some(content) = row.content.and_then(|c| self.row_content.get(c)) {
            content.paint(canvas);
            return;
        }

        let mut text_x = rect.x + PADDING;
        if self.controller.is_multiple() {
            let check = Rect::new(
                text_x,
                rect.y + (rect.height - CHECKBOX_SIZE) / 2.0,
                CHECKBOX_SIZE,
                CHECKBOX_SIZE,
            );
            let color = if option.disabled { p.disabled } else { p.accent };
            if selected {
                canvas.fill_rect(check, color);
                canvas.draw_path(
                    &[
                        Point::new(check.x + 3.5, check.y + 8.0),
                        Point::new(check.x + 6.5, check.y + 11.0),
                        Point::new(check.x + 12.5, check.y + 5.0),
                    ],
                    Color::WHITE,
                    2.0,
                );
            } else {
                canvas.stroke_rect(check, if option.disabled { p.disabled } else { p.input_border }, 1.0);
            }
            text_x += CHECKBOX_SIZE + PADDING;
        }

        let color = if option.disabled { p.disabled } else { p.panel_text };
        canvas.draw_text(
            &option.text,
            Point::new(text_x, rect.y + (rect.height - self.font_size()) / 2.0),
            &self.text_style(color),
        );
    }

    fn paint_tooltip(&self, canvas: &mut dyn Canvas) {
        let Some(option) = self
            .hovered_row
            .and_then(|i| self.rows.get(i))
            .and_then(Row::option)
        else {
            return;
        };
        let Some(pointer) = self.pointer else {
            return;
        };

        let style = TextStyle {
            size: 12.0,
            color: self.palette.tooltip_text,
            weight: FontWeight::Normal,
        };
        let width = style.estimate_width(&option.text) + PADDING * 2.0;
        let height = style.size + PADDING * 2.0;
        let mut x = pointer.x;
        if let Some(viewport) = self.viewport {
            x = x.min(viewport.width - width).max(0.0);
        }
        let rect = Rect::new(x, pointer.y + TOOLTIP_OFFSET, width, height);

        canvas.fill_rect(rect, self.palette.tooltip_background);
        canvas.draw_text(&option.text, Point::new(rect.x + PADDING, rect.y + PADDING), &style);
    }
}

impl InputMeasure for Selectify {
    fn measure_input(&self) -> Option<Measurement> {
        let viewport = self.viewport?;
        if self.bounds.is_empty() {
            return None;
        }
        Some(Measurement {
            input: self.bounds,
            viewport_height: viewport.height,
        })
    }
}

impl Widget for Selectify {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let label = self.controller.input_placeholder(&self.placeholder);
        let text_width = self.text_style(self.palette.text).estimate_width(&label);
        let width = (text_width + PADDING + CHEVRON_WIDTH).max(self.min_width());
        constraints.constrain(Size::new(width, INPUT_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.controller.run_deferred();
        let measurement = self.measure_input();
        self.controller.reposition(&measurement);
        self.sync();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let root = self.root_rect();
        if let Some(background) = self.palette.root_background {
            canvas.fill_rect(root, background);
        }
        if let Some(border) = self.palette.root_border {
            canvas.stroke_rect(root, border, 1.0);
        }

        self.paint_input(canvas);

        if let Some(panel) = self.panel_rect() {
            self.paint_panel(canvas, panel);
            if self.show_tooltip {
                self.paint_tooltip(canvas);
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::Resize { width, height } = event {
            self.viewport = Some(Size::new(*width, *height));
            let measurement = self.measure_input();
            self.controller.reposition(&measurement);
        }
        if self.controller.is_disabled() {
            return None;
        }

        match event {
            Event::MouseMove { position } => {
                self.pointer = Some(*position);
                self.hovered_row = self.row_at(position);
            }
            Event::MouseLeave => {
                self.pointer = None;
                self.hovered_row = None;
            }
            Event::MouseDown { position, button } => {
                self.pointer = Some(*position);
                self.pointer_down(event, *position, *button);
            }
            Event::KeyDown { key } => self.key_down(event, *key),
            Event::TextInput { text } => self.text_input(text),
            Event::FocusIn => self.controller.focus(),
            Event::FocusOut => self.controller.blur(),
            Event::Scroll { delta_y, .. } => self.scrolled(*delta_y),
            Event::Tick { delta_ms } => self.advance_scroll(*delta_ms),
            _ => {}
        }

        self.sync();
        let messages = self.controller.take_messages();
        if messages.is_empty() {
            None
        } else {
            Some(Box::new(messages))
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.row_content
    }

    fn is_interactive(&self) -> bool {
        !self.controller.is_disabled()
    }

    fn is_focusable(&self) -> bool {
        !self.controller.is_disabled()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value
            .as_deref()
            .or_else(|| (!self.placeholder.is_empty()).then_some(self.placeholder.as_str()))
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ComboBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.root_rect()
    }
}
