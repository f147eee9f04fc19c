use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use parking_lot::Mutex;
use ratatui::layout::{Position, Rect};

use crate::config::Config;
use crate::pager::{
    PagerError, PagerEvent, PagerHandle, PagerId, PagerIntent, PagerRegistry, PagerSignal,
    PaginationState, RenderPlan, Subscription,
};
use crate::ui::buttons::{hit_test, layout_controls, ButtonTemplate};
use crate::ui::layout::{button_row, layout_regions, pager_blocks};

/// Most recent activity lines kept for display.
pub const ACTIVITY_LIMIT: usize = 8;

/// Latest plan per pager, written by the mount subscriber.
type MountedPlans = Arc<Mutex<HashMap<PagerId, RenderPlan>>>;
type ActivityLog = Arc<Mutex<VecDeque<String>>>;

/// Snapshot of one pager for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerView {
    pub handle: PagerHandle,
    pub state: PaginationState,
    pub plan: RenderPlan,
    pub focused: bool,
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    registry: PagerRegistry,
    order: Vec<PagerHandle>,
    focused: usize,
    template: ButtonTemplate,
    mounted: MountedPlans,
    activity: ActivityLog,
    /// Held for the app's lifetime; dropping them unmounts the pagers.
    _subscriptions: Vec<Subscription>,
}

impl App {
    pub fn from_config(config: &Config) -> Result<Self, PagerError> {
        let mut registry = PagerRegistry::new();
        let mounted: MountedPlans = Arc::new(Mutex::new(HashMap::new()));
        let activity: ActivityLog =
            Arc::new(Mutex::new(VecDeque::with_capacity(ACTIVITY_LIMIT)));
        let mut order = Vec::with_capacity(config.pagers.len());
        let mut subscriptions = Vec::with_capacity(config.pagers.len() * 2);

        for pager in &config.pagers {
            let id = PagerId::new(pager.id.as_str())?;
            let state = PaginationState::new(pager.current_page, pager.total_pages);
            let handle = registry.create(id.clone(), state)?;

            let initial = registry.draw_page_buttons(&handle, None, None)?;
            mounted.lock().insert(id, initial);

            let mount = Arc::clone(&mounted);
            subscriptions.push(registry.subscribe(&handle, move |event: &PagerEvent| {
                mount.lock().insert(event.pager.clone(), event.plan.clone());
            })?);

            let log = Arc::clone(&activity);
            subscriptions.push(registry.subscribe(&handle, move |event: &PagerEvent| {
                let mut log = log.lock();
                if log.len() == ACTIVITY_LIMIT {
                    log.pop_front();
                }
                log.push_back(describe(event));
            })?);

            order.push(handle);
        }

        Ok(Self {
            should_quit: false,
            size: None,
            registry,
            order,
            focused: 0,
            template: ButtonTemplate::default(),
            mounted,
            activity,
            _subscriptions: subscriptions,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn template(&self) -> &ButtonTemplate {
        &self.template
    }

    pub fn registry(&self) -> &PagerRegistry {
        &self.registry
    }

    pub fn focused_handle(&self) -> Option<&PagerHandle> {
        self.order.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.order.is_empty() {
            self.focused = (self.focused + 1) % self.order.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.order.is_empty() {
            self.focused = (self.focused + self.order.len() - 1) % self.order.len();
        }
    }

    /// Pagers in display order with the plan currently mounted for each.
    pub fn pager_views(&self) -> Vec<PagerView> {
        let mounted = self.mounted.lock();
        self.order
            .iter()
            .enumerate()
            .filter_map(|(idx, handle)| {
                let pager = self.registry.get(handle).ok()?;
                Some(PagerView {
                    handle: handle.clone(),
                    state: pager.state(),
                    plan: mounted
                        .get(handle.id())
                        .cloned()
                        .unwrap_or_else(|| pager.render_plan()),
                    focused: idx == self.focused,
                })
            })
            .collect()
    }

    /// Recent change notifications, oldest first.
    pub fn activity(&self) -> Vec<String> {
        self.activity.lock().iter().cloned().collect()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return;
            }
            _ => {}
        }

        let Some(handle) = self.focused_handle().cloned() else {
            return;
        };
        let Ok(state) = self.registry.get(&handle).map(|pager| pager.state()) else {
            return;
        };

        let intent = match key.code {
            KeyCode::Left | KeyCode::Char('h') => PagerIntent::PreviousClicked,
            KeyCode::Right | KeyCode::Char('l') => PagerIntent::NextClicked,
            KeyCode::Home => PagerIntent::SetCurrentPage(1),
            KeyCode::End => PagerIntent::SetCurrentPage(state.total_pages()),
            KeyCode::Char('+') => {
                PagerIntent::SetTotalPages(state.total_pages().saturating_add(1))
            }
            KeyCode::Char('-') => {
                PagerIntent::SetTotalPages(state.total_pages().saturating_sub(1))
            }
            _ => return,
        };
        self.dispatch(&handle, intent);
    }

    /// Route a left click to the pager whose button row it landed on.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };

        let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
        let views = self.pager_views();
        let blocks = pager_blocks(body, views.len());

        for (idx, (view, block)) in views.iter().zip(blocks).enumerate() {
            if !block.contains(Position::new(mouse.column, mouse.row)) {
                continue;
            }
            self.focused = idx;
            let areas = layout_controls(&view.plan, view.state, button_row(block), &self.template);
            if let Some(intent) = hit_test(&areas, mouse.column, mouse.row) {
                self.dispatch(&view.handle, intent);
            }
            return;
        }
    }

    fn dispatch(&mut self, handle: &PagerHandle, intent: PagerIntent) {
        if let Err(err) = self.registry.dispatch(handle, intent) {
            tracing::warn!(pager = %handle.id(), ?intent, "dispatch failed: {err}");
        }
    }
}

fn describe(event: &PagerEvent) -> String {
    match event.signal {
        PagerSignal::CurrentPageChanged { from, to } => format!(
            "{}: page {} -> {} (showing page {} of {})",
            event.pager,
            from,
            to,
            event.state.current_page(),
            event.state.total_pages()
        ),
        PagerSignal::TotalsChanged { from, to } => format!(
            "{}: {} -> {} pages (on page {})",
            event.pager,
            from,
            to,
            event.state.current_page()
        ),
    }
}
