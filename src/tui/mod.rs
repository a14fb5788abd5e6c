//! Ratatui-based terminal UI.
//!
//! The TUI mirrors the original three-page demo: an Introduction page, an
//! EDA Insights page with sample charts, and a Cost Prediction page with a
//! settings panel for the applicant profile and a Predict action.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Terminal,
};

use crate::app::pipeline::{self, EdaOutput};
use crate::cli::PredictArgs;
use crate::domain::{
    Estimate, PredictConfig, AGE_MAX, AGE_MIN, BMI_MAX, BMI_MIN, CHILDREN_MAX, CHILDREN_MIN,
    EdaConfig,
};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::{ChargesHistogramChart, SmokerBoxChart};

/// Start the TUI.
pub fn run(args: PredictArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Introduction,
    EdaInsights,
    CostPrediction,
}

impl Page {
    fn next(self) -> Page {
        match self {
            Page::Introduction => Page::EdaInsights,
            Page::EdaInsights => Page::CostPrediction,
            Page::CostPrediction => Page::Introduction,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Page::Introduction => "Introduction",
            Page::EdaInsights => "EDA Insights",
            Page::CostPrediction => "Cost Prediction",
        }
    }
}

/// Selectable rows of the prediction settings panel.
///
/// Fields 0-5 are the profile inputs; the last row is the Predict action.
const FIELD_COUNT: usize = 7;
const PREDICT_ROW: usize = 6;

struct App {
    page: Page,
    config: PredictConfig,
    selected_field: usize,
    editing: bool,
    edit_input: String,
    status: String,
    rng: StdRng,
    demo_seed: u64,
    eda: EdaOutput,
    estimate: Option<Estimate>,
}

impl App {
    fn new(args: PredictArgs) -> Result<Self, AppError> {
        let config = crate::app::predict_config_from_args(&args);
        config.profile.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let demo_seed = 42;
        let eda = pipeline::run_eda(&demo_config(demo_seed))?;

        Ok(Self {
            page: Page::Introduction,
            config,
            selected_field: 0,
            editing: false,
            edit_input: String::new(),
            status: "Welcome. Keys 1/2/3 or Tab switch pages.".to_string(),
            rng,
            demo_seed,
            eda,
            estimate: None,
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        if self.editing {
            return self.handle_field_edit(code);
        }

        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('1') => self.page = Page::Introduction,
            KeyCode::Char('2') => self.page = Page::EdaInsights,
            KeyCode::Char('3') => self.page = Page::CostPrediction,
            KeyCode::Tab => self.page = self.page.next(),
            KeyCode::Char('r') => {
                if self.page == Page::EdaInsights {
                    self.demo_seed = self.demo_seed.wrapping_add(1);
                    self.eda = pipeline::run_eda(&demo_config(self.demo_seed))?;
                    self.status = "Resampled demo data.".to_string();
                }
            }
            KeyCode::Up => {
                if self.page == Page::CostPrediction && self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.page == Page::CostPrediction && self.selected_field < FIELD_COUNT - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => {
                if self.page == Page::CostPrediction {
                    self.adjust_field(-1);
                }
            }
            KeyCode::Right => {
                if self.page == Page::CostPrediction {
                    self.adjust_field(1);
                }
            }
            KeyCode::Enter => {
                if self.page == Page::CostPrediction {
                    self.activate_field();
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_field_edit(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing = false;
                self.apply_edit_input();
            }
            KeyCode::Backspace => {
                self.edit_input.pop();
            }
            KeyCode::Char(c) => {
                // The BMI field accepts a decimal point; age/children are integers.
                if c.is_ascii_digit() || (c == '.' && self.selected_field == 1) {
                    self.edit_input.push(c);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// ←/→ on the settings panel: step numerics, cycle enums.
    fn adjust_field(&mut self, delta: i32) {
        let profile = &mut self.config.profile;
        match self.selected_field {
            0 => {
                profile.age = if delta >= 0 {
                    profile.age.saturating_add(1).min(AGE_MAX)
                } else {
                    profile.age.saturating_sub(1).max(AGE_MIN)
                };
                self.status = format!("age: {}", profile.age);
            }
            1 => {
                let step = if delta >= 0 { 0.5 } else { -0.5 };
                profile.bmi = (profile.bmi + step).clamp(BMI_MIN, BMI_MAX);
                self.status = format!("bmi: {:.1}", profile.bmi);
            }
            2 => {
                profile.children = if delta >= 0 {
                    profile.children.saturating_add(1).min(CHILDREN_MAX)
                } else {
                    profile.children.saturating_sub(1).max(CHILDREN_MIN)
                };
                self.status = format!("children: {}", profile.children);
            }
            3 => {
                profile.sex = if delta >= 0 { profile.sex.next() } else { profile.sex.prev() };
                self.status = format!("sex: {}", profile.sex.display_name());
            }
            4 => {
                profile.smoker = if delta >= 0 {
                    profile.smoker.next()
                } else {
                    profile.smoker.prev()
                };
                self.status = format!("smoker: {}", profile.smoker.display_name());
            }
            5 => {
                profile.region = if delta >= 0 {
                    profile.region.next()
                } else {
                    profile.region.prev()
                };
                self.status = format!("region: {}", profile.region.display_name());
            }
            _ => {}
        }
    }

    /// Enter on the settings panel: edit numerics, cycle enums, or predict.
    fn activate_field(&mut self) {
        match self.selected_field {
            0 | 1 | 2 => {
                self.editing = true;
                self.edit_input.clear();
                self.status =
                    "Editing value. Enter to apply, Esc to cancel.".to_string();
            }
            3 | 4 | 5 => self.adjust_field(1),
            PREDICT_ROW => self.predict(),
            _ => {}
        }
    }

    fn apply_edit_input(&mut self) {
        let trimmed = self.edit_input.trim();
        if trimmed.is_empty() {
            self.status = "Edit canceled (empty input).".to_string();
            return;
        }

        // Widget semantics: out-of-range input is clamped into the field's
        // domain rather than rejected.
        let profile = &mut self.config.profile;
        match self.selected_field {
            0 => match trimmed.parse::<u32>() {
                Ok(v) => {
                    profile.age = v.clamp(AGE_MIN, AGE_MAX);
                    self.status = format!("age: {}", profile.age);
                }
                Err(e) => self.status = format!("Invalid age '{trimmed}': {e}"),
            },
            1 => match trimmed.parse::<f64>() {
                Ok(v) => {
                    profile.bmi = v.clamp(BMI_MIN, BMI_MAX);
                    self.status = format!("bmi: {:.1}", profile.bmi);
                }
                Err(e) => self.status = format!("Invalid bmi '{trimmed}': {e}"),
            },
            2 => match trimmed.parse::<u32>() {
                Ok(v) => {
                    profile.children = v.clamp(CHILDREN_MIN, CHILDREN_MAX);
                    self.status = format!("children: {}", profile.children);
                }
                Err(e) => self.status = format!("Invalid children '{trimmed}': {e}"),
            },
            _ => {}
        }
    }

    fn predict(&mut self) {
        let estimate = crate::model::predict_cost(&self.config.profile, &mut self.rng);
        self.status = format!(
            "Predicted: {}",
            crate::report::format_currency(estimate.cost)
        );
        self.estimate = Some(estimate);
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.page {
            Page::Introduction => self.draw_introduction(frame, chunks[1]),
            Page::EdaInsights => self.draw_eda(frame, chunks[1]),
            Page::CostPrediction => self.draw_prediction(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("medicost", Style::default().fg(Color::Cyan)),
            Span::raw(" — Medical Insurance Cost Prediction"),
        ]));

        let mut tabs: Vec<Span> = Vec::new();
        for (i, page) in [Page::Introduction, Page::EdaInsights, Page::CostPrediction]
            .into_iter()
            .enumerate()
        {
            let label = format!("[{}] {}", i + 1, page.title());
            if page == self.page {
                tabs.push(Span::styled(
                    label,
                    Style::default().fg(Color::Black).bg(Color::White),
                ));
            } else {
                tabs.push(Span::styled(label, Style::default().fg(Color::Gray)));
            }
            tabs.push(Span::raw("  "));
        }
        lines.push(Line::from(tabs));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_introduction(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Project Overview").borders(Borders::ALL);
        let text = concat!(
            "This demo predicts medical insurance charges from demographic and ",
            "health-related factors: age, sex, BMI, smoking status, number of ",
            "children, and region.\n\n",
            "The prediction is a transparent heuristic: a linear formula over the ",
            "profile fields plus a uniform noise term, floored at a minimum cost. ",
            "There is no trained model and nothing is persisted.\n\n",
            "Pages:\n",
            "  1. Introduction — this overview\n",
            "  2. EDA Insights — sample charts from randomly generated demo data\n",
            "  3. Cost Prediction — enter a profile and predict the cost\n",
        );
        let p = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(p, area);
    }

    fn draw_eda(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.draw_histogram(frame, chunks[0]);
        self.draw_box_plot(frame, chunks[1]);
    }

    fn draw_histogram(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Distribution of Insurance Charges")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let bins = &self.eda.hist;
        if bins.is_empty() {
            let msg = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        }

        let x0 = bins[0].start;
        let x1 = bins[bins.len() - 1].start + bins[bins.len() - 1].width;
        let peak = bins.iter().map(|b| b.count).max().unwrap_or(1) as f64;

        let widget = ChargesHistogramChart {
            bins,
            x_bounds: [x0, x1],
            y_max: peak * 1.05,
            x_label: "charges",
            y_label: "count",
        };
        frame.render_widget(widget, inner);
    }

    fn draw_box_plot(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Impact of Smoking on Charges")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (smoker, non_smoker) = crate::data::charges_by_smoker(&self.eda.data.rows);

        let y0 = self.eda.data.stats.charges_min;
        let y1 = self.eda.data.stats.charges_max;
        let pad = ((y1 - y0).abs() * 0.05).max(1e-12);

        let widget = SmokerBoxChart {
            smoker: &smoker,
            non_smoker: &non_smoker,
            y_bounds: [y0 - pad, y1 + pad],
        };
        frame.render_widget(widget, inner);
    }

    fn draw_prediction(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(area);

        self.draw_settings(frame, chunks[0]);
        self.draw_result(frame, chunks[1]);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let profile = &self.config.profile;

        let mut items = Vec::new();
        items.push(ListItem::new(format!("Age: {}", profile.age)));
        items.push(ListItem::new(format!("BMI: {:.1}", profile.bmi)));
        items.push(ListItem::new(format!("Children: {}", profile.children)));
        items.push(ListItem::new(format!("Sex: {}", profile.sex.display_name())));
        items.push(ListItem::new(format!(
            "Smoker: {}",
            profile.smoker.display_name()
        )));
        items.push(ListItem::new(format!(
            "Region: {}",
            profile.region.display_name()
        )));
        items.push(ListItem::new("[ Predict Cost ]"));

        let list = List::new(items)
            .block(Block::default().title("Applicant Profile").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing {
            let hint = Paragraph::new(format!("New value: {}_", self.edit_input))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Prediction Result").borders(Borders::ALL);

        let Some(estimate) = &self.estimate else {
            let p = Paragraph::new("Select [ Predict Cost ] and press Enter.")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            frame.render_widget(p, area);
            return;
        };

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            format!(
                "Estimated Medical Insurance Cost: {}",
                crate::report::format_currency(estimate.cost)
            ),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!(
                "base={} age={} bmi={} smoker={} children={} noise={}",
                crate::report::format_currency(estimate.base),
                crate::report::format_currency(estimate.age_term),
                crate::report::format_currency(estimate.bmi_term),
                crate::report::format_currency(estimate.smoker_term),
                crate::report::format_currency(estimate.children_term),
                estimate.noise,
            ),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            "Note: this is a demonstration heuristic, not a trained model.",
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.page {
            Page::Introduction => "1/2/3 or Tab pages  q quit",
            Page::EdaInsights => "1/2/3 or Tab pages  r resample  q quit",
            Page::CostPrediction => {
                "↑/↓ select  ←/→ adjust  Enter edit/predict  1/2/3 pages  q quit"
            }
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn demo_config(seed: u64) -> EdaConfig {
    EdaConfig {
        count: crate::data::DEMO_ROWS,
        seed,
        bins: 12,
        plot_width: 100,
        plot_height: 15,
        export: None,
    }
}
